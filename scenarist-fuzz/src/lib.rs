//! Fuzzing entry points for scenarist-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_encode

use scenarist_core::{
    constants::{SCREEN_COLUMNS, SCREEN_ROWS},
    encode_caption, write_footer, CaptionScreen, Channel, Color, FontStyle, Mode, Session,
};

/// Build a caption screen from raw bytes, four bytes per cell
///
/// Bytes are (position, character, font, color); values outside the
/// enumerations wrap around instead of being rejected.
pub fn screen_from_bytes(data: &[u8]) -> CaptionScreen {
    let (channel, start) = match data {
        [c, s0, s1, ..] => (c % 4 + 1, u16::from_be_bytes([*s0, *s1]) as i64 * 10),
        _ => (1, 0),
    };
    let channel = Channel::new(channel).unwrap_or_default();
    let mut screen = CaptionScreen::new(channel, start, start + 2000);

    for chunk in data.get(3..).unwrap_or_default().chunks_exact(4) {
        let position = chunk[0] as usize % (SCREEN_ROWS * SCREEN_COLUMNS);
        let (row, column) = (position / SCREEN_COLUMNS, position % SCREEN_COLUMNS);
        let cell = &mut screen.cells[row][column];
        cell.character = chunk[1].max(0x20);
        cell.font = FontStyle::ALL[chunk[2] as usize % FontStyle::ALL.len()];
        cell.color = Color::ALL[chunk[3] as usize % Color::ALL.len()];
        screen.row_used[row] = true;
    }

    screen
}

/// Encode a fuzzed screen in both modes - should never panic
pub fn fuzz_encode(data: &[u8]) {
    let screen = screen_from_bytes(data);

    for mode in [Mode::Binary, Mode::Mnemonic] {
        let mut session = Session::new(mode);
        let mut sink = Vec::new();
        let _ = encode_caption(&mut sink, &mut session, &screen);
        let _ = write_footer(&mut sink, &mut session);
    }
}

/// Encode a sequence of fuzzed screens on one session - should never panic
pub fn fuzz_stream(data: &[u8]) {
    let mut session = Session::new(Mode::Binary);
    let mut sink = Vec::new();

    for chunk in data.chunks(64) {
        let _ = encode_caption(&mut sink, &mut session, &screen_from_bytes(chunk));
    }
    let _ = write_footer(&mut sink, &mut session);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_encode_empty() {
        fuzz_encode(&[]);
    }

    #[test]
    fn test_fuzz_encode_random() {
        fuzz_encode(&[0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0]);
    }

    #[test]
    fn test_fuzz_stream_saturated() {
        fuzz_stream(&[0xFF; 1024]);
    }

    #[test]
    fn test_screen_from_bytes_places_cells() {
        let screen = screen_from_bytes(&[1, 0, 100, 33, b'A', 1, 4]);
        assert_eq!(screen.channel, Channel::CC2);
        assert_eq!(screen.start_ms, 1000);
        assert!(screen.row_used[1]);
        assert_eq!(screen.cell(1, 1).character, b'A');
        assert_eq!(screen.cell(1, 1).font, FontStyle::Italics);
        assert_eq!(screen.cell(1, 1).color, Color::Red);
    }
}
