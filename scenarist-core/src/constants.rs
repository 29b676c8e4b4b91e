//! Constants and limits for the Scenarist caption format

/// Frame rate of the destination timecodes (NTSC, non-drop)
pub const FPS: f64 = 29.97;

/// Duration of a single frame in milliseconds
pub const FRAME_DURATION_MS: f64 = 1000.0 / FPS;

/// Highest frame number a timecode can display
pub const MAX_FRAME: u32 = 29;

/// Two timecodes whose frames differ by less than this are the same instant
pub const FRAME_TOLERANCE: f32 = 3.0;

/// Number of caption rows on a CEA-608 screen
pub const SCREEN_ROWS: usize = 15;

/// Number of caption columns on a CEA-608 screen
pub const SCREEN_COLUMNS: usize = 32;

/// Row the cursor rests on before the first cell is placed
pub const INITIAL_ROW: u8 = 14;

/// Preamble codes address the column in groups of this many cells
pub const PREAMBLE_COLUMN_GROUP: u8 = 4;

/// Number of preamble column groups per row
pub const PREAMBLE_GROUPS_PER_ROW: u8 = 8;

/// Number of preamble codes in the catalog (15 rows x 8 column groups)
pub const PREAMBLE_CODE_COUNT: usize = SCREEN_ROWS * PREAMBLE_GROUPS_PER_ROW as usize;

/// Capacity of a single composed line in bytes
///
/// The worst case is a padding unit plus three control codes and a character
/// for every cell of the screen, which fits well below this bound in both
/// notations.
pub const LINE_CAPACITY: usize = 16 * 1024;

/// Characters occupied by one word in hex notation: separator + 4 hex digits
pub const SLOT_WIDTH: usize = 5;

/// Content bytes carried by one word (and transmitted per frame)
pub const BYTES_PER_WORD: usize = 2;

/// Byte used to pad a half-filled word, already odd-parity protected
pub const PADDING_BYTE: u8 = 0x80;

/// Padding placeholder in mnemonic notation
pub const MNEMONIC_PADDING: u8 = b'_';

/// First line of a binary Scenarist stream
pub const SCC_HEADER: &str = "Scenarist_SCC V1.0";

/// Blank character of the caption grid
pub const BLANK: u8 = b' ';
