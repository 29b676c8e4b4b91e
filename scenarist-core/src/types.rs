//! Caption screen model consumed by the encoder

use crate::constants::{BLANK, SCREEN_COLUMNS, SCREEN_ROWS};
use crate::error::EncodeError;
use serde::{Deserialize, Serialize};

/// Caption data channel (CC1 to CC4)
///
/// Channels 1/3 and 2/4 share the same control-code framing, so the only
/// property the encoder cares about is whether the channel is odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel(u8);

impl Channel {
    /// CC1
    pub const CC1: Channel = Channel(1);
    /// CC2
    pub const CC2: Channel = Channel(2);
    /// CC3
    pub const CC3: Channel = Channel(3);
    /// CC4
    pub const CC4: Channel = Channel(4);

    /// Create a channel, rejecting numbers outside 1-4
    pub const fn new(number: u8) -> Result<Self, EncodeError> {
        match number {
            1..=4 => Ok(Self(number)),
            _ => Err(EncodeError::InvalidChannel(number)),
        }
    }

    /// Channel number (1-4)
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Channels 1 and 3 use the odd first-byte column of the catalog
    pub const fn is_odd(&self) -> bool {
        self.0 % 2 == 1
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::CC1
    }
}

impl TryFrom<u8> for Channel {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Channel::new(value)
    }
}

/// Font style of a caption cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// Upright, no underline
    #[default]
    Regular,
    /// Italics (always rendered white)
    Italics,
    /// Underlined
    Underlined,
    /// Underlined italics (always rendered white)
    UnderlinedItalics,
}

impl FontStyle {
    /// All styles, in decoder order
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Regular,
        FontStyle::Italics,
        FontStyle::Underlined,
        FontStyle::UnderlinedItalics,
    ];
}

impl TryFrom<u8> for FontStyle {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FontStyle::ALL
            .get(value as usize)
            .copied()
            .ok_or(EncodeError::UnknownFont(value))
    }
}

/// Foreground color of a caption cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// White
    #[default]
    White,
    /// Green
    Green,
    /// Blue
    Blue,
    /// Cyan
    Cyan,
    /// Red
    Red,
    /// Yellow
    Yellow,
    /// Magenta
    Magenta,
    /// Decoder-defined color; no mid-row code exists for it
    UserDefined,
    /// Black
    Black,
    /// Transparent; no mid-row code exists for it
    Transparent,
}

impl Color {
    /// All colors, in decoder order
    pub const ALL: [Color; 10] = [
        Color::White,
        Color::Green,
        Color::Blue,
        Color::Cyan,
        Color::Red,
        Color::Yellow,
        Color::Magenta,
        Color::UserDefined,
        Color::Black,
        Color::Transparent,
    ];
}

impl TryFrom<u8> for Color {
    type Error = EncodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Color::ALL
            .get(value as usize)
            .copied()
            .ok_or(EncodeError::UnknownColor(value))
    }
}

/// One character cell of the caption grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// CEA-608 character byte
    pub character: u8,

    /// Font style
    pub font: FontStyle,

    /// Foreground color
    pub color: Color,
}

impl Cell {
    /// A blank cell in the default style
    pub const BLANK: Cell = Cell {
        character: BLANK,
        font: FontStyle::Regular,
        color: Color::White,
    };

    /// Whether the cell holds a space
    pub const fn is_blank(&self) -> bool {
        self.character == BLANK
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A decoded 15x32 caption screen with its presentation interval
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionScreen {
    /// Character grid, indexed `[row][column]`
    pub cells: [[Cell; SCREEN_COLUMNS]; SCREEN_ROWS],

    /// Rows that carry content
    pub row_used: [bool; SCREEN_ROWS],

    /// Channel the caption belongs to
    pub channel: Channel,

    /// Presentation start in milliseconds
    pub start_ms: i64,

    /// Presentation end in milliseconds
    pub end_ms: i64,
}

impl CaptionScreen {
    /// Create an empty screen
    pub fn new(channel: Channel, start_ms: i64, end_ms: i64) -> Self {
        Self {
            cells: [[Cell::BLANK; SCREEN_COLUMNS]; SCREEN_ROWS],
            row_used: [false; SCREEN_ROWS],
            channel,
            start_ms,
            end_ms,
        }
    }

    /// Place `text` starting at `row`/`column` in a single style and mark the row used
    pub fn put_text(
        &mut self,
        row: usize,
        column: usize,
        text: &[u8],
        font: FontStyle,
        color: Color,
    ) -> Result<(), EncodeError> {
        let end = column.checked_add(text.len());
        if row >= SCREEN_ROWS || end.map_or(true, |end| end > SCREEN_COLUMNS) {
            return Err(EncodeError::InvalidPosition {
                row,
                column: column.saturating_add(text.len().saturating_sub(1)),
            });
        }

        for (offset, &character) in text.iter().enumerate() {
            self.cells[row][column + offset] = Cell {
                character,
                font,
                color,
            };
        }
        self.row_used[row] = true;

        Ok(())
    }

    /// Get a cell
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.cells[row][column]
    }

    /// First and last non-blank column of a row, or `None` if the row has none
    pub fn row_limits(&self, row: usize) -> Option<(usize, usize)> {
        let cells = &self.cells[row];
        let first = cells.iter().position(|c| !c.is_blank())?;
        let last = cells.iter().rposition(|c| !c.is_blank())?;
        Some((first, last))
    }

    /// Whether no used row carries a visible character
    pub fn is_empty(&self) -> bool {
        (0..SCREEN_ROWS).all(|row| !self.row_used[row] || self.row_limits(row).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_parity() {
        assert!(Channel::CC1.is_odd());
        assert!(!Channel::CC2.is_odd());
        assert!(Channel::CC3.is_odd());
        assert!(!Channel::CC4.is_odd());
        assert_eq!(Channel::new(0), Err(EncodeError::InvalidChannel(0)));
        assert_eq!(Channel::try_from(5), Err(EncodeError::InvalidChannel(5)));
    }

    #[test]
    fn test_style_conversion() {
        assert_eq!(FontStyle::try_from(3), Ok(FontStyle::UnderlinedItalics));
        assert_eq!(FontStyle::try_from(4), Err(EncodeError::UnknownFont(4)));
        assert_eq!(Color::try_from(8), Ok(Color::Black));
        assert_eq!(Color::try_from(10), Err(EncodeError::UnknownColor(10)));
    }

    #[test]
    fn test_put_text_and_limits() {
        let mut screen = CaptionScreen::new(Channel::CC1, 0, 1000);
        screen
            .put_text(7, 10, b"HI YOU", FontStyle::Regular, Color::Red)
            .unwrap();

        assert!(screen.row_used[7]);
        assert_eq!(screen.row_limits(7), Some((10, 15)));
        assert_eq!(screen.row_limits(6), None);
        assert_eq!(screen.cell(7, 11).color, Color::Red);
        assert!(!screen.is_empty());
    }

    #[test]
    fn test_put_text_off_screen() {
        let mut screen = CaptionScreen::new(Channel::CC1, 0, 1000);
        assert!(screen
            .put_text(15, 0, b"X", FontStyle::Regular, Color::White)
            .is_err());
        assert!(screen
            .put_text(0, 30, b"XYZ", FontStyle::Regular, Color::White)
            .is_err());
        assert!(screen.is_empty());
    }

    #[test]
    fn test_put_text_column_overflow() {
        let mut screen = CaptionScreen::new(Channel::CC1, 0, 1000);
        assert_eq!(
            screen.put_text(0, usize::MAX, b"X", FontStyle::Regular, Color::White),
            Err(EncodeError::InvalidPosition {
                row: 0,
                column: usize::MAX
            })
        );
        assert!(screen.is_empty());
    }
}
