use crate::OutputFormat;
use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use scenarist_core::{
    encode_caption, write_footer, write_header, CaptionScreen, Channel, Color, FontStyle, Session,
};
use serde::Deserialize;
use std::fs;
use tracing::{info, warn};

/// One caption as described in the JSON input
#[derive(Debug, Deserialize)]
pub struct CaptionInput {
    #[serde(default = "default_channel")]
    pub channel: u8,
    pub start_ms: i64,
    pub end_ms: i64,
    #[serde(default)]
    pub rows: Vec<RowInput>,
}

/// A run of text on one row, in a single style
#[derive(Debug, Deserialize)]
pub struct RowInput {
    pub row: usize,
    #[serde(default)]
    pub column: usize,
    pub text: String,
    #[serde(default)]
    pub font: FontStyle,
    #[serde(default)]
    pub color: Color,
}

fn default_channel() -> u8 {
    1
}

impl CaptionInput {
    /// Lay the caption out on a screen
    pub fn to_screen(&self) -> Result<CaptionScreen> {
        let channel = Channel::new(self.channel)?;
        let mut screen = CaptionScreen::new(channel, self.start_ms, self.end_ms);

        for run in &self.rows {
            if !run.text.is_ascii() {
                bail!("Row {} text {:?} is not plain ASCII", run.row, run.text);
            }
            screen.put_text(run.row, run.column, run.text.as_bytes(), run.font, run.color)?;
        }

        Ok(screen)
    }
}

pub fn execute(input: &str, output: &str, format: OutputFormat, progress: bool) -> Result<()> {
    info!("Encoding captions from {} to {} ({:?})", input, output, format);

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let captions: Vec<CaptionInput> =
        serde_json::from_str(&content).with_context(|| "Failed to parse JSON input")?;

    info!("Found {} captions to encode", captions.len());

    let bar = if progress {
        let bar = ProgressBar::new(captions.len() as u64);
        bar.set_style(ProgressStyle::with_template(
            "{bar:40} {pos}/{len} captions {msg}",
        )?);
        Some(bar)
    } else {
        None
    };

    let mut session = Session::new(format.mode());
    let mut output_data = Vec::new();
    write_header(&mut output_data, &session)?;

    let mut last_start = i64::MIN;
    for (i, caption) in captions.iter().enumerate() {
        if caption.start_ms < last_start {
            warn!(
                "Caption {} starts before the previous one ({} < {} ms)",
                i, caption.start_ms, last_start
            );
        }
        last_start = caption.start_ms;

        let screen = caption
            .to_screen()
            .with_context(|| format!("Invalid caption {}", i))?;

        if screen.is_empty() {
            warn!("Caption {} has no visible text", i);
        }

        encode_caption(&mut output_data, &mut session, &screen)
            .with_context(|| format!("Failed to encode caption {}", i))?;

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    write_footer(&mut output_data, &mut session).with_context(|| "Failed to write footer")?;

    if let Some(bar) = bar {
        bar.finish_with_message("done");
    }

    fs::write(output, &output_data)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Successfully encoded {} captions ({} bytes total)",
        captions.len(),
        output_data.len()
    );

    Ok(())
}
