//! Control-code catalog
//!
//! Every CEA-608 control code the encoder emits, with the first byte for odd
//! and even channels, the shared second byte and the mnemonic used by the
//! disassembled notation. The table is immutable and indexed by [`ControlCode`].

use crate::constants::{PREAMBLE_CODE_COUNT, PREAMBLE_COLUMN_GROUP, PREAMBLE_GROUPS_PER_ROW};
use crate::types::{Channel, Color, FontStyle};
use core::fmt;

/// Byte pair and mnemonic of one control code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCodeInfo {
    /// First byte on channels 1 and 3
    pub byte1_odd: u8,

    /// First byte on channels 2 and 4
    pub byte1_even: u8,

    /// Second byte, identical on every channel
    pub byte2: u8,

    /// Tag written in mnemonic notation
    pub mnemonic: &'static str,
}

impl ControlCodeInfo {
    const fn new(byte1_odd: u8, byte1_even: u8, byte2: u8, mnemonic: &'static str) -> Self {
        Self {
            byte1_odd,
            byte1_even,
            byte2,
            mnemonic,
        }
    }
}

/// Category of a control code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// Mid-row style and color change
    MidRow,
    /// Memory and loading commands
    Miscellaneous,
    /// Column offset of 1 to 3 beyond a preamble
    TabOffset,
    /// Row and column group address
    Preamble,
}

/// Identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlCode(u8);

impl ControlCode {
    /// White
    pub const WH: ControlCode = ControlCode(0);
    /// White underline
    pub const WH_U: ControlCode = ControlCode(1);
    /// Green
    pub const GR: ControlCode = ControlCode(2);
    /// Green underline
    pub const GR_U: ControlCode = ControlCode(3);
    /// Blue
    pub const BL: ControlCode = ControlCode(4);
    /// Blue underline
    pub const BL_U: ControlCode = ControlCode(5);
    /// Cyan
    pub const CY: ControlCode = ControlCode(6);
    /// Cyan underline
    pub const CY_U: ControlCode = ControlCode(7);
    /// Red
    pub const R: ControlCode = ControlCode(8);
    /// Red underline
    pub const R_U: ControlCode = ControlCode(9);
    /// Yellow
    pub const Y: ControlCode = ControlCode(10);
    /// Yellow underline
    pub const Y_U: ControlCode = ControlCode(11);
    /// Magenta
    pub const MA: ControlCode = ControlCode(12);
    /// Magenta underline
    pub const MA_U: ControlCode = ControlCode(13);
    /// Black
    pub const BK: ControlCode = ControlCode(14);
    /// Black underline
    pub const BK_U: ControlCode = ControlCode(15);
    /// White italics
    pub const I: ControlCode = ControlCode(16);
    /// White italics underline
    pub const I_U: ControlCode = ControlCode(17);

    /// Resume caption loading
    pub const RCL: ControlCode = ControlCode(18);
    /// Erase displayed memory
    pub const EDM: ControlCode = ControlCode(19);
    /// Erase non-displayed memory
    pub const ENM: ControlCode = ControlCode(20);
    /// End of caption (swap memories)
    pub const EOC: ControlCode = ControlCode(21);

    /// Tab offset 1 column
    pub const TO1: ControlCode = ControlCode(22);
    /// Tab offset 2 columns
    pub const TO2: ControlCode = ControlCode(23);
    /// Tab offset 3 columns
    pub const TO3: ControlCode = ControlCode(24);

    const MID_ROW_END: u8 = Self::RCL.0;
    const MISC_END: u8 = Self::TO1.0;
    const PREAMBLE_START: u8 = 25;

    /// Number of entries in the catalog
    pub const COUNT: usize = Self::PREAMBLE_START as usize + PREAMBLE_CODE_COUNT;

    /// Position of this code in the catalog
    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Catalog entry for this code
    pub fn info(&self) -> &'static ControlCodeInfo {
        &CONTROL_CODES[self.0 as usize]
    }

    /// First byte of the pair on `channel`
    pub fn first_byte(&self, channel: Channel) -> u8 {
        let info = self.info();
        if channel.is_odd() {
            info.byte1_odd
        } else {
            info.byte1_even
        }
    }

    /// Second byte of the pair
    pub fn second_byte(&self) -> u8 {
        self.info().byte2
    }

    /// Tag used in mnemonic notation
    pub fn mnemonic(&self) -> &'static str {
        self.info().mnemonic
    }

    /// Category of this code
    pub const fn kind(&self) -> CodeKind {
        if self.0 < Self::MID_ROW_END {
            CodeKind::MidRow
        } else if self.0 < Self::MISC_END {
            CodeKind::Miscellaneous
        } else if self.0 < Self::PREAMBLE_START {
            CodeKind::TabOffset
        } else {
            CodeKind::Preamble
        }
    }

    /// Whether this is a preamble address code
    pub const fn is_preamble(&self) -> bool {
        matches!(self.kind(), CodeKind::Preamble)
    }

    /// Whether this is a tab offset code
    pub const fn is_tab_offset(&self) -> bool {
        matches!(self.kind(), CodeKind::TabOffset)
    }

    /// Whether this is a mid-row style code
    pub const fn is_mid_row(&self) -> bool {
        matches!(self.kind(), CodeKind::MidRow)
    }

    /// Iterate over the whole catalog in table order
    pub fn all() -> impl Iterator<Item = ControlCode> {
        (0..Self::COUNT as u8).map(ControlCode)
    }
}

impl fmt::Display for ControlCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Look up the catalog entry for `code`
pub fn lookup(code: ControlCode) -> &'static ControlCodeInfo {
    code.info()
}

/// Preamble code addressing `row` (0-14) and the 4-column group holding `column` (0-31)
///
/// Out-of-range arguments are clamped to the last row or group.
pub fn preamble_code(row: u8, column: u8) -> ControlCode {
    let group = (column / PREAMBLE_COLUMN_GROUP).min(PREAMBLE_GROUPS_PER_ROW - 1);
    let index = (row as usize * PREAMBLE_GROUPS_PER_ROW as usize + group as usize)
        .min(PREAMBLE_CODE_COUNT - 1);
    ControlCode(ControlCode::PREAMBLE_START + index as u8)
}

/// Tab offset needed after a preamble to reach `column` exactly
///
/// Columns on a 4-column boundary are reached by the preamble alone.
pub fn tab_offset_code(column: u8) -> Option<ControlCode> {
    match column % PREAMBLE_COLUMN_GROUP {
        0 => None,
        offset => Some(ControlCode(ControlCode::TO1.0 + offset - 1)),
    }
}

/// Mid-row code selecting `color` in the regular style
pub fn color_code(color: Color) -> ControlCode {
    match color {
        Color::White => ControlCode::WH,
        Color::Green => ControlCode::GR,
        Color::Blue => ControlCode::BL,
        Color::Cyan => ControlCode::CY,
        Color::Red => ControlCode::R,
        Color::Yellow => ControlCode::Y,
        Color::Magenta => ControlCode::MA,
        Color::Black => ControlCode::BK,
        // No mid-row code for these
        Color::UserDefined | Color::Transparent => ControlCode::WH,
    }
}

/// Mid-row code for a font style and color
///
/// Italic styles have no color variants and always select white.
pub fn font_code(style: FontStyle, color: Color) -> ControlCode {
    match style {
        FontStyle::Regular => color_code(color),
        FontStyle::Underlined => ControlCode(color_code(color).0 + 1),
        FontStyle::Italics => ControlCode::I,
        FontStyle::UnderlinedItalics => ControlCode::I_U,
    }
}

static CONTROL_CODES: [ControlCodeInfo; ControlCode::COUNT] = [
    // Mid-row
    ControlCodeInfo::new(0x11, 0x19, 0x20, "{Wh}"),
    ControlCodeInfo::new(0x11, 0x19, 0x21, "{WhU}"),
    ControlCodeInfo::new(0x11, 0x19, 0xa2, "{Gr}"),
    ControlCodeInfo::new(0x11, 0x19, 0x23, "{GrU}"),
    ControlCodeInfo::new(0x11, 0x19, 0xa4, "{Bl}"),
    ControlCodeInfo::new(0x11, 0x19, 0x25, "{BlU}"),
    ControlCodeInfo::new(0x11, 0x19, 0x26, "{Cy}"),
    ControlCodeInfo::new(0x11, 0x19, 0xa7, "{CyU}"),
    ControlCodeInfo::new(0x11, 0x19, 0xa8, "{R}"),
    ControlCodeInfo::new(0x11, 0x19, 0x29, "{RU}"),
    ControlCodeInfo::new(0x11, 0x19, 0x2a, "{Y}"),
    ControlCodeInfo::new(0x11, 0x19, 0xab, "{YU}"),
    ControlCodeInfo::new(0x11, 0x19, 0x2c, "{Ma}"),
    ControlCodeInfo::new(0x11, 0x19, 0xad, "{MaU}"),
    ControlCodeInfo::new(0x11, 0x19, 0xae, "{Bk}"),
    ControlCodeInfo::new(0x11, 0x19, 0x2f, "{BkU}"),
    ControlCodeInfo::new(0x11, 0x19, 0x2e, "{I}"),
    ControlCodeInfo::new(0x11, 0x19, 0x2f, "{IU}"),
    // Miscellaneous
    ControlCodeInfo::new(0x14, 0x1c, 0x20, "{RCL}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x2c, "{EDM}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x2e, "{ENM}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x2f, "{EOC}"),
    // Tab offsets
    ControlCodeInfo::new(0x17, 0x1f, 0x21, "{TO1}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x22, "{TO2}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x23, "{TO3}"),
    // Preambles, mnemonic {RRCC}: one-based row, first column of the group
    // Row 01
    ControlCodeInfo::new(0x11, 0x19, 0x50, "{0100}"),
    ControlCodeInfo::new(0x11, 0x19, 0x52, "{0104}"),
    ControlCodeInfo::new(0x11, 0x19, 0x54, "{0108}"),
    ControlCodeInfo::new(0x11, 0x19, 0x56, "{0112}"),
    ControlCodeInfo::new(0x11, 0x19, 0x58, "{0116}"),
    ControlCodeInfo::new(0x11, 0x19, 0x5a, "{0120}"),
    ControlCodeInfo::new(0x11, 0x19, 0x5c, "{0124}"),
    ControlCodeInfo::new(0x11, 0x19, 0x5f, "{0128}"),
    // Row 02
    ControlCodeInfo::new(0x11, 0x19, 0x70, "{0200}"),
    ControlCodeInfo::new(0x11, 0x19, 0x72, "{0204}"),
    ControlCodeInfo::new(0x11, 0x19, 0x74, "{0208}"),
    ControlCodeInfo::new(0x11, 0x19, 0x76, "{0212}"),
    ControlCodeInfo::new(0x11, 0x19, 0x78, "{0216}"),
    ControlCodeInfo::new(0x11, 0x19, 0x7a, "{0220}"),
    ControlCodeInfo::new(0x11, 0x19, 0x7c, "{0224}"),
    ControlCodeInfo::new(0x11, 0x19, 0x7f, "{0228}"),
    // Row 03
    ControlCodeInfo::new(0x12, 0x1a, 0x50, "{0300}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x52, "{0304}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x54, "{0308}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x56, "{0312}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x58, "{0316}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x5a, "{0320}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x5c, "{0324}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x5f, "{0328}"),
    // Row 04
    ControlCodeInfo::new(0x12, 0x1a, 0x70, "{0400}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x72, "{0404}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x74, "{0408}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x76, "{0412}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x78, "{0416}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x7a, "{0420}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x7c, "{0424}"),
    ControlCodeInfo::new(0x12, 0x1a, 0x7f, "{0428}"),
    // Row 05
    ControlCodeInfo::new(0x15, 0x1d, 0x50, "{0500}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x52, "{0504}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x54, "{0508}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x56, "{0512}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x58, "{0516}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x5a, "{0520}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x5c, "{0524}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x5f, "{0528}"),
    // Row 06
    ControlCodeInfo::new(0x15, 0x1d, 0x70, "{0600}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x72, "{0604}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x74, "{0608}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x76, "{0612}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x78, "{0616}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x7a, "{0620}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x7c, "{0624}"),
    ControlCodeInfo::new(0x15, 0x1d, 0x7f, "{0628}"),
    // Row 07
    ControlCodeInfo::new(0x16, 0x1e, 0x50, "{0700}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x52, "{0704}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x54, "{0708}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x56, "{0712}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x58, "{0716}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x5a, "{0720}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x5c, "{0724}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x5f, "{0728}"),
    // Row 08
    ControlCodeInfo::new(0x16, 0x1e, 0x70, "{0800}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x72, "{0804}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x74, "{0808}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x76, "{0812}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x78, "{0816}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x7a, "{0820}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x7c, "{0824}"),
    ControlCodeInfo::new(0x16, 0x1e, 0x7f, "{0828}"),
    // Row 09
    ControlCodeInfo::new(0x17, 0x1f, 0x50, "{0900}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x52, "{0904}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x54, "{0908}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x56, "{0912}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x58, "{0916}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x5a, "{0920}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x5c, "{0924}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x5f, "{0928}"),
    // Row 10
    ControlCodeInfo::new(0x17, 0x1f, 0x70, "{1000}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x72, "{1004}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x74, "{1008}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x76, "{1012}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x78, "{1016}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x7a, "{1020}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x7c, "{1024}"),
    ControlCodeInfo::new(0x17, 0x1f, 0x7f, "{1028}"),
    // Row 11
    ControlCodeInfo::new(0x10, 0x18, 0x50, "{1100}"),
    ControlCodeInfo::new(0x10, 0x18, 0x52, "{1104}"),
    ControlCodeInfo::new(0x10, 0x18, 0x54, "{1108}"),
    ControlCodeInfo::new(0x10, 0x18, 0x56, "{1112}"),
    ControlCodeInfo::new(0x10, 0x18, 0x58, "{1116}"),
    ControlCodeInfo::new(0x10, 0x18, 0x5a, "{1120}"),
    ControlCodeInfo::new(0x10, 0x18, 0x5c, "{1124}"),
    ControlCodeInfo::new(0x10, 0x18, 0x5f, "{1128}"),
    // Row 12
    ControlCodeInfo::new(0x13, 0x1b, 0x50, "{1200}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x52, "{1204}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x54, "{1208}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x56, "{1212}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x58, "{1216}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x5a, "{1220}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x5c, "{1224}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x5f, "{1228}"),
    // Row 13
    ControlCodeInfo::new(0x13, 0x1b, 0x70, "{1300}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x72, "{1304}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x74, "{1308}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x76, "{1312}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x78, "{1316}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x7a, "{1320}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x7c, "{1324}"),
    ControlCodeInfo::new(0x13, 0x1b, 0x7f, "{1328}"),
    // Row 14
    ControlCodeInfo::new(0x14, 0x1c, 0x50, "{1400}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x52, "{1404}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x54, "{1408}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x56, "{1412}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x58, "{1416}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x5a, "{1420}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x5c, "{1424}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x5f, "{1428}"),
    // Row 15
    ControlCodeInfo::new(0x14, 0x1c, 0x70, "{1500}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x72, "{1504}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x74, "{1508}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x76, "{1512}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x78, "{1516}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x7a, "{1520}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x7c, "{1524}"),
    ControlCodeInfo::new(0x14, 0x1c, 0x7f, "{1528}"),
];
