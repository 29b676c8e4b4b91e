use anyhow::Result;
use clap::{Parser, Subcommand};
use scenarist_cli::{commands, CodeFilter, OutputFormat};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "scenarist")]
#[command(about = "Scenarist - Encode CEA-608 captions as SCC/CCD files", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode captions described in JSON
    Encode {
        /// Input JSON file (array of captions)
        #[arg(short, long)]
        input: String,

        /// Output caption file
        #[arg(short, long)]
        output: String,

        /// Output flavor
        #[arg(short, long, value_enum, default_value = "scc")]
        mode: OutputFormat,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },

    /// List the control-code catalog
    Catalog {
        /// Caption channel (1-4)
        #[arg(short, long, default_value = "1")]
        channel: u8,

        /// Restrict to one kind of code
        #[arg(long, value_enum, default_value = "all")]
        kind: CodeFilter,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            output,
            mode,
            progress,
        } => commands::encode::execute(&input, &output, mode, progress),

        Commands::Catalog { channel, kind } => commands::catalog::execute(channel, kind),
    }
}
