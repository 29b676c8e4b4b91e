//! Library entry for scenarist-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

use scenarist_core::codes::CodeKind;
use scenarist_core::Mode;

/// Output file flavor
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Scenarist SCC: parity-protected hex words
    Scc,
    /// Disassembled SCC: mnemonic tags and plain text
    Ccd,
}

impl OutputFormat {
    /// Encoder mode for this format
    pub fn mode(self) -> Mode {
        match self {
            OutputFormat::Scc => Mode::Binary,
            OutputFormat::Ccd => Mode::Mnemonic,
        }
    }
}

/// Which part of the control-code catalog to list
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CodeFilter {
    /// Every code
    All,
    /// Mid-row style codes
    MidRow,
    /// RCL, EDM, ENM, EOC
    Misc,
    /// Tab offsets
    TabOffset,
    /// Preamble address codes
    Preamble,
}

impl CodeFilter {
    /// Whether codes of `kind` pass the filter
    pub fn accepts(self, kind: CodeKind) -> bool {
        match self {
            CodeFilter::All => true,
            CodeFilter::MidRow => kind == CodeKind::MidRow,
            CodeFilter::Misc => kind == CodeKind::Miscellaneous,
            CodeFilter::TabOffset => kind == CodeKind::TabOffset,
            CodeFilter::Preamble => kind == CodeKind::Preamble,
        }
    }
}

// Re-export commonly used items
pub use crate::commands::encode;
