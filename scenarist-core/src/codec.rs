//! Odd parity, word alignment and the two serialization notations
//!
//! Content is composed into a [`LineBuffer`], which counts the content bytes
//! (characters and control-code bytes) separately from the serialized text so
//! that control codes always start on a word boundary. How each unit is
//! spelled is decided by a [`Notation`]: [`Hex`] for SCC files, [`Mnemonic`]
//! for the disassembled CCD form.

use crate::codes::ControlCode;
use crate::constants::{BYTES_PER_WORD, LINE_CAPACITY, MNEMONIC_PADDING, PADDING_BYTE};
use crate::types::Channel;
use bytes::{BufMut, BytesMut};
use core::fmt::{self, Write};
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::warn;

/// Set or clear the top bit so the byte carries an odd number of set bits
///
/// Only bit 7 is touched; the low seven bits are the payload.
pub const fn odd_parity(byte: u8) -> u8 {
    let low = byte & 0x7f;
    if low.count_ones() % 2 == 0 {
        low | 0x80
    } else {
        low
    }
}

/// Fixed-capacity buffer for one serialized line
///
/// Writes past the capacity are dropped, but [`LineBuffer::len`] keeps counting
/// them so length-derived timing stays consistent with the logical content.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    buf: BytesMut,
    capacity: usize,
    logical_len: usize,
    content_bytes: usize,
}

impl LineBuffer {
    /// Create a buffer with the default line capacity
    pub fn new() -> Self {
        Self::with_capacity(LINE_CAPACITY)
    }

    /// Create a buffer holding at most `capacity` serialized bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            capacity,
            logical_len: 0,
            content_bytes: 0,
        }
    }

    /// Append serialized bytes, clipped to the remaining capacity
    pub fn put(&mut self, data: &[u8]) {
        let room = self.capacity - self.buf.len();
        let take = data.len().min(room);

        #[cfg(feature = "logging")]
        if take < data.len() && !self.is_clipped() {
            warn!(
                "Line buffer full at {} bytes, dropping serialized output",
                self.capacity
            );
        }

        self.buf.put_slice(&data[..take]);
        self.logical_len += data.len();
    }

    /// Logical serialized length, including anything clipped
    pub fn len(&self) -> usize {
        self.logical_len
    }

    /// Whether nothing was written
    pub fn is_empty(&self) -> bool {
        self.logical_len == 0
    }

    /// Whether any write was dropped
    pub fn is_clipped(&self) -> bool {
        self.logical_len > self.buf.len()
    }

    /// Serialized bytes that fit in the buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Number of content bytes (characters, code bytes, padding) composed so far
    pub fn content_bytes(&self) -> usize {
        self.content_bytes
    }

    /// Number of two-byte words the content occupies; one word is sent per frame
    pub fn words(&self) -> usize {
        (self.content_bytes + BYTES_PER_WORD - 1) / BYTES_PER_WORD
    }

    /// Reset for the next line
    pub fn clear(&mut self) {
        self.buf.clear();
        self.logical_len = 0;
        self.content_bytes = 0;
    }

    /// Append one displayable character
    pub fn push_character(&mut self, notation: &dyn Notation, character: u8) {
        notation.character(self, character);
        self.content_bytes += 1;
    }

    /// Append a control code, padding first so it fills a whole word
    pub fn push_control_code(&mut self, notation: &dyn Notation, channel: Channel, code: ControlCode) {
        self.align_word(notation);
        notation.control_code(self, channel, code);
        self.content_bytes += 2;
    }

    /// Pad a half-filled word
    pub fn align_word(&mut self, notation: &dyn Notation) {
        if self.content_bytes % BYTES_PER_WORD == 1 {
            notation.padding(self);
            self.content_bytes += 1;
        }
    }

    fn at_word_start(&self) -> bool {
        self.content_bytes % BYTES_PER_WORD == 0
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put(s.as_bytes());
        Ok(())
    }
}

/// Spelling of content units in a serialized line
///
/// Implementations only write text; the [`LineBuffer`] keeps the content-byte
/// count and decides when padding is due.
pub trait Notation {
    /// Write one displayable character
    fn character(&self, line: &mut LineBuffer, character: u8);

    /// Write one control code for `channel`
    fn control_code(&self, line: &mut LineBuffer, channel: Channel, code: ControlCode);

    /// Write the filler for a half-filled word
    fn padding(&self, line: &mut LineBuffer);
}

/// Space-separated words of parity-protected hex bytes (SCC)
#[derive(Debug, Clone, Copy, Default)]
pub struct Hex;

impl Notation for Hex {
    fn character(&self, line: &mut LineBuffer, character: u8) {
        if line.at_word_start() {
            line.put(b" ");
        }
        let _ = write!(line, "{:02x}", odd_parity(character));
    }

    fn control_code(&self, line: &mut LineBuffer, channel: Channel, code: ControlCode) {
        if line.at_word_start() {
            line.put(b" ");
        }
        let _ = write!(
            line,
            "{:02x}{:02x}",
            odd_parity(code.first_byte(channel)),
            odd_parity(code.second_byte())
        );
    }

    fn padding(&self, line: &mut LineBuffer) {
        let _ = write!(line, "{:02x}", PADDING_BYTE);
    }
}

/// Raw characters and bracketed control-code tags (CCD)
#[derive(Debug, Clone, Copy, Default)]
pub struct Mnemonic;

impl Notation for Mnemonic {
    fn character(&self, line: &mut LineBuffer, character: u8) {
        line.put(&[character]);
    }

    fn control_code(&self, line: &mut LineBuffer, _channel: Channel, code: ControlCode) {
        line.put(code.mnemonic().as_bytes());
    }

    fn padding(&self, line: &mut LineBuffer) {
        line.put(&[MNEMONIC_PADDING]);
    }
}

/// Output mode of a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Hex words (Scenarist SCC)
    #[default]
    Binary,
    /// Mnemonic tags (disassembled CCD)
    Mnemonic,
}

impl Mode {
    /// Notation used to serialize lines in this mode
    pub fn notation(&self) -> &'static dyn Notation {
        match self {
            Mode::Binary => &Hex,
            Mode::Mnemonic => &Mnemonic,
        }
    }

    /// Text written before every timecoded block
    pub const fn block_separator(&self) -> &'static str {
        match self {
            Mode::Binary => "\n\n",
            Mode::Mnemonic => "\n",
        }
    }
}
