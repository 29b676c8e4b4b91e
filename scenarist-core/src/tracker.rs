//! Cursor and style tracking over a caption screen
//!
//! Walks every used row from its first to its last visible character and
//! emits a preamble, a tab offset and a mid-row style code only when the
//! decoder's cursor would otherwise be in the wrong place or the wrong style.

use crate::codec::{LineBuffer, Notation};
use crate::codes::{font_code, preamble_code, tab_offset_code, ControlCode};
use crate::constants::{INITIAL_ROW, SCREEN_ROWS};
use crate::types::{CaptionScreen, Cell, Channel, Color, FontStyle};

/// Where the decoder's cursor is believed to be and which style it paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    row: usize,
    column: usize,
    font: FontStyle,
    color: Color,
    positioned: bool,
}

impl Cursor {
    fn new() -> Self {
        Self {
            row: INITIAL_ROW as usize,
            column: 0,
            font: FontStyle::Regular,
            color: Color::White,
            positioned: false,
        }
    }

    fn is_at(&self, row: usize, column: usize) -> bool {
        self.positioned && self.row == row && self.column == column
    }

    fn paints(&self, cell: &Cell) -> bool {
        self.font == cell.font && self.color == cell.color
    }

    fn place(&mut self, row: usize, column: usize, cell: &Cell) {
        self.row = row;
        self.column = column;
        self.font = cell.font;
        self.color = cell.color;
        self.positioned = true;
    }
}

/// Compose the visible content of `screen` into `line`
///
/// Each row ends word-aligned. The caller writes any leading command such
/// as RCL.
pub fn compose_screen(screen: &CaptionScreen, notation: &dyn Notation, line: &mut LineBuffer) {
    let channel = screen.channel;
    let mut cursor = Cursor::new();

    for row in 0..SCREEN_ROWS {
        if !screen.row_used[row] {
            continue;
        }
        let Some((first, last)) = screen.row_limits(row) else {
            continue;
        };

        let mut column = first;
        while column <= last {
            let cell = screen.cell(row, column);
            let restyle = !cursor.paints(cell);

            if restyle || !cursor.is_at(row, column) {
                let (position, style) = if !restyle {
                    // A preamble resets the decoder to white regular; the style is not re-sent
                    (column, None)
                } else if cell.is_blank() {
                    // The mid-row code is displayed as a space, so it stands in for the blank
                    let position = column;
                    column += 1;
                    let next = screen.cell(row, column);
                    (position, Some(font_code(next.font, next.color)))
                } else {
                    // The mid-row code takes the cell before the character
                    (column.saturating_sub(1), Some(font_code(cell.font, cell.color)))
                };

                emit_position(line, notation, channel, row, position);
                if let Some(code) = style {
                    line.push_control_code(notation, channel, code);
                }
                cursor.place(row, column, screen.cell(row, column));
            }

            line.push_character(notation, screen.cell(row, column).character);
            cursor.column += 1;
            column += 1;
        }

        line.align_word(notation);
    }
}

fn emit_position(
    line: &mut LineBuffer,
    notation: &dyn Notation,
    channel: Channel,
    row: usize,
    column: usize,
) {
    line.push_control_code(notation, channel, preamble_code(row as u8, column as u8));
    if let Some(offset) = tab_offset_code(column as u8) {
        line.push_control_code(notation, channel, offset);
    }
}

/// Control codes `compose_screen` emits for `screen`, in order
pub fn planned_codes(screen: &CaptionScreen) -> alloc::vec::Vec<ControlCode> {
    let recorder = Recorder::default();
    let mut line = LineBuffer::new();
    compose_screen(screen, &recorder, &mut line);
    recorder.codes.into_inner()
}

#[derive(Default)]
struct Recorder {
    codes: core::cell::RefCell<alloc::vec::Vec<ControlCode>>,
}

impl Notation for Recorder {
    fn character(&self, _line: &mut LineBuffer, _character: u8) {}

    fn control_code(&self, _line: &mut LineBuffer, _channel: Channel, code: ControlCode) {
        self.codes.borrow_mut().push(code);
    }

    fn padding(&self, _line: &mut LineBuffer) {}
}
