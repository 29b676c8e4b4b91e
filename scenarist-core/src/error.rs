//! Error types for Scenarist encoding

use alloc::string::String;

/// Errors that can occur while encoding caption screens
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// A raw font style value has no entry in the style table
    #[cfg_attr(feature = "std", error("Unknown font style: {0}"))]
    UnknownFont(u8),

    /// A raw color value has no entry in the color table
    #[cfg_attr(feature = "std", error("Unknown color: {0}"))]
    UnknownColor(u8),

    /// Caption channels are numbered 1 to 4
    #[cfg_attr(feature = "std", error("Invalid caption channel: {0} (expected 1-4)"))]
    InvalidChannel(u8),

    /// A cell position outside the 15x32 screen
    #[cfg_attr(feature = "std", error("Position row {row}, column {column} is off screen"))]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// IO error while writing to the sink
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(String),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for EncodeError {
    fn from(err: std::io::Error) -> Self {
        EncodeError::Io(err.to_string())
    }
}
