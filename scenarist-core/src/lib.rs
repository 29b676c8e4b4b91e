//! # Scenarist Core
//!
//! Encodes decoded CEA-608 caption screens into the Scenarist caption
//! interchange format, either as hex words (SCC) or as mnemonic text (CCD).
//!
//! ## Modules
//!
//! - `constants`: Frame rate, screen geometry and buffer limits
//! - `types`: Caption screen model (CaptionScreen, Channel, FontStyle, Color)
//! - `codes`: Control-code catalog
//! - `codec`: Odd parity, line buffer and serialization notations
//! - `tracker`: Cursor and style tracking over a caption screen
//! - `timecode`: Millisecond to SMPTE timecode conversion
//! - `writer`: Load/show protocol and per-stream session state

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod codec;
pub mod codes;
pub mod constants;
pub mod error;
pub mod timecode;
pub mod tracker;
pub mod types;
#[cfg(feature = "std")]
pub mod writer;

// Re-export commonly used types
pub use codec::Mode;
pub use codes::ControlCode;
pub use error::EncodeError;
pub use timecode::Timecode;
pub use types::{CaptionScreen, Channel, Color, FontStyle};
#[cfg(feature = "std")]
pub use writer::{encode_caption, write_footer, write_header, Session};

/// Result type alias for Scenarist operations
pub type Result<T> = core::result::Result<T, EncodeError>;
