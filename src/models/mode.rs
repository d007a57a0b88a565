use std::fmt;

/// QR data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Decimal digits, 3 per 10 bits
    Numeric,
    /// 45-symbol alphabet, 2 per 11 bits
    Alphanumeric,
    /// Latin-1 bytes, 8 bits each
    Byte,
    /// Shift-JIS double-byte characters, 13 bits each
    Kanji,
}

impl Mode {
    /// All modes, in mode indicator order
    pub const ALL: [Mode; 4] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji];

    /// 4-bit mode indicator (0001, 0010, 0100, 1000)
    pub fn indicator(&self) -> u8 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Width of the character count indicator for a Model 2 version (1-40)
    pub fn char_count_bits(&self, version: u8) -> Option<u8> {
        let class = match version {
            1..=9 => 0,
            10..=26 => 1,
            27..=40 => 2,
            _ => return None,
        };
        let widths = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
        };
        Some(widths[class])
    }

    /// Lowercase mode name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
            Mode::Kanji => "kanji",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
