use std::fmt::{Display, Formatter};

use encoding_rs::SHIFT_JIS;

use crate::common::error::{QRError, QRResult};

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl Mode {
    // Row of the mode in per mode tables
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
            Self::Kanji => 3,
        }
    }

    #[inline]
    fn numeric_digit(ch: char) -> Option<u16> {
        ch.is_ascii_digit().then(|| ch as u16 - '0' as u16)
    }

    #[inline]
    fn alphanumeric_digit(ch: char) -> Option<u16> {
        let digit = match ch {
            '0'..='9' => ch as u16 - '0' as u16,
            'A'..='Z' => ch as u16 - 'A' as u16 + 10,
            ' ' => 36,
            '$' => 37,
            '%' => 38,
            '*' => 39,
            '+' => 40,
            '-' => 41,
            '.' => 42,
            '/' => 43,
            ':' => 44,
            _ => return None,
        };
        Some(digit)
    }

    /// 13 bit kanji value of a char, if its Shift JIS encoding lies in the kanji ranges and maps
    /// to a JIS X 0208 cell.
    fn kanji_value(ch: char) -> Option<u16> {
        let mut buf = [0; 4];
        let (sjis, _, had_errors) = SHIFT_JIS.encode(ch.encode_utf8(&mut buf));
        if had_errors || sjis.len() != 2 {
            return None;
        }

        let (lead, trail) = (sjis[0], sjis[1]);
        let sjis_value = u16::from_be_bytes([lead, trail]);
        let base = match sjis_value {
            0x8140..=0x9FFC => 0x8140,
            0xE040..=0xEBBF => 0xC140,
            _ => return None,
        };

        let row = match lead {
            0x81..=0x9F => (lead - 0x81) as u16 * 2 + 1,
            _ => (lead - 0xC1) as u16 * 2 + 1,
        } + (trail >= 0x9F) as u16;
        let col = match trail {
            0x40..=0x7E => trail - 0x3F,
            0x80..=0x9E => trail - 0x40,
            0x9F..=0xFC => trail - 0x9E,
            _ => return None,
        };
        if !(1..=94).contains(&row) || !(1..=94).contains(&col) {
            return None;
        }

        let [msb, lsb] = (sjis_value - base).to_be_bytes();
        Some(msb as u16 * 0xC0 + lsb as u16)
    }

    pub fn contains(&self, ch: char) -> bool {
        match self {
            Self::Numeric => Self::numeric_digit(ch).is_some(),
            Self::Alphanumeric => Self::alphanumeric_digit(ch).is_some(),
            Self::Byte => true,
            Self::Kanji => Self::kanji_value(ch).is_some(),
        }
    }

    // Bit length of a chunk of chars encoded together
    pub fn chunk_bit_len(&self, len: usize) -> usize {
        match self {
            Self::Numeric => [0, 4, 7, 10][len],
            Self::Alphanumeric => [0, 6, 11][len],
            Self::Byte => 8 * len,
            Self::Kanji => 13 * len,
        }
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        match *self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
            Self::Kanji => len * 13,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Numeric => "Numeric",
            Self::Alphanumeric => "Alphanumeric",
            Self::Byte => "Byte",
            Self::Kanji => "Kanji",
        };
        f.write_str(name)
    }
}


// Bit group
//------------------------------------------------------------------------------

/// Fixed width group of bits produced for a chunk of characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitGroup {
    pub value: u16,
    pub len: usize,
}

impl BitGroup {
    pub fn new(value: u16, len: usize) -> Self {
        debug_assert!(len <= 16 && (value as u32) < (1 << len), "Value {value} exceeds {len} bits");
        Self { value, len }
    }
}

impl Display for BitGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.len)
    }
}

// Segment
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Numeric(&'a str),
    Alphanumeric(&'a str),
    Byte(&'a [u8]),
    Kanji(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSegment {
    pub mode: Mode,
    pub groups: Vec<BitGroup>,
    // Characters for numeric, alphanumeric & kanji, bytes for byte mode
    pub char_cnt: usize,
}

impl EncodedSegment {
    pub fn bit_len(&self) -> usize {
        self.groups.iter().map(|g| g.len).sum()
    }
}

impl<'a> Segment<'a> {
    pub fn new(text: &'a str, mode: Mode) -> Self {
        match mode {
            Mode::Numeric => Self::Numeric(text),
            Mode::Alphanumeric => Self::Alphanumeric(text),
            Mode::Byte => Self::Byte(text.as_bytes()),
            Mode::Kanji => Self::Kanji(text),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Self::Numeric(_) => Mode::Numeric,
            Self::Alphanumeric(_) => Mode::Alphanumeric,
            Self::Byte(_) => Mode::Byte,
            Self::Kanji(_) => Mode::Kanji,
        }
    }

    pub fn encode(&self) -> QRResult<EncodedSegment> {
        let mode = self.mode();
        let (values, chunk_sz, factor) = match *self {
            Self::Numeric(text) => (Self::char_values(text, mode, Mode::numeric_digit)?, 3, 10),
            Self::Alphanumeric(text) => {
                (Self::char_values(text, mode, Mode::alphanumeric_digit)?, 2, 45)
            }
            Self::Kanji(text) => (Self::char_values(text, mode, Mode::kanji_value)?, 1, 0),
            Self::Byte(data) => (data.iter().map(|&b| b as u16).collect(), 1, 0),
        };

        let groups = values
            .chunks(chunk_sz)
            .map(|c| {
                let value = c.iter().fold(0, |n, &v| n * factor + v);
                BitGroup::new(value, mode.chunk_bit_len(c.len()))
            })
            .collect();
        Ok(EncodedSegment { mode, groups, char_cnt: values.len() })
    }

    fn char_values(text: &str, mode: Mode, value: fn(char) -> Option<u16>) -> QRResult<Vec<u16>> {
        text.chars().map(|ch| value(ch).ok_or(QRError::InvalidInput { ch, mode })).collect()
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
