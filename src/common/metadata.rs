use std::fmt::{Display, Formatter};
use std::ops::Deref;

use log::{debug, warn};

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::version_db::*;

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct Version(pub(crate) usize);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    pub fn new(version: usize) -> QRResult<Self> {
        match version {
            1..=40 => Ok(Self(version)),
            _ => Err(QRError::InvalidConfig { field: "version", value: version }),
        }
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    fn index(self) -> usize {
        debug_assert!((1..=40).contains(&self.0), "Invalid version: {}", self.0);
        self.0 - 1
    }

    pub fn ec_block_info(self, ecl: ECLevel) -> ECBlockInfo {
        EC_BLOCK_INFOS[ecl as usize][self.index()]
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        DATA_CODEWORDS[ecl as usize][self.index()]
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    pub fn total_codewords(self) -> usize {
        TOTAL_CODEWORDS[self.index()]
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        self.ec_block_info(ecl).ec_codewords_per_block
    }

    pub fn char_capacity(self, mode: Mode, ecl: ECLevel) -> usize {
        CHAR_CAPACITIES[mode.index()][ecl as usize][self.index()]
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let band = match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        CHAR_CNT_BITS[mode.index()][band]
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_LOCATIONS[self.index()]
    }

    pub fn info(self) -> u32 {
        VERSION_INFOS[self.index()]
    }

    pub fn remainder_bits(self) -> usize {
        REMAINDER_BITS[self.index()]
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Version resolution
//------------------------------------------------------------------------------

impl Version {
    /// Finds the smallest version, no smaller than `min_version`, whose character capacity for
    /// `mode` at `ecl` can hold `char_cnt` characters.
    ///
    /// Two pointers converge from both ends of the range. The ascending pointer returns as soon
    /// as its version fits, the descending pointer returns as soon as the version right below it
    /// doesn't. Capacities grow with the version, so either exit yields the smallest fit.
    pub fn resolve(
        mode: Mode,
        ecl: ECLevel,
        min_version: usize,
        char_cnt: usize,
    ) -> QRResult<Version> {
        let min = Version::new(min_version)
            .map_err(|_| QRError::InvalidConfig { field: "min_version", value: min_version })?;

        if Version::MAX.char_capacity(mode, ecl) < char_cnt {
            warn!("{char_cnt} {mode} characters exceed capacity of version 40 at level {ecl:?}");
            return Err(QRError::CapacityExceeded);
        }

        let (mut lo, mut hi) = (*min, *Version::MAX);
        loop {
            if Version(lo).char_capacity(mode, ecl) >= char_cnt {
                debug!("Resolved version {lo} for {char_cnt} {mode} characters");
                return Ok(Version(lo));
            }
            if Version(hi - 1).char_capacity(mode, ecl) < char_cnt {
                debug!("Resolved version {hi} for {char_cnt} {mode} characters");
                return Ok(Version(hi));
            }
            lo += 1;
            hi -= 1;
        }
    }
}


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    // Format info encoding of the level
    pub fn format_bits(self) -> u8 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
            Self::Q => 0b11,
            Self::H => 0b10,
        }
    }
}

// Error correction block info
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ECBlockInfo {
    pub group1_blocks: usize,
    pub group1_data_codewords: usize,
    pub group2_blocks: usize,
    pub group2_data_codewords: usize,
    pub ec_codewords_per_block: usize,
}

impl ECBlockInfo {
    pub const fn new(
        group1_blocks: usize,
        group1_data_codewords: usize,
        group2_blocks: usize,
        group2_data_codewords: usize,
        ec_codewords_per_block: usize,
    ) -> Self {
        Self {
            group1_blocks,
            group1_data_codewords,
            group2_blocks,
            group2_data_codewords,
            ec_codewords_per_block,
        }
    }

    pub fn total_blocks(&self) -> usize {
        self.group1_blocks + self.group2_blocks
    }

    pub fn total_data_codewords(&self) -> usize {
        self.group1_blocks * self.group1_data_codewords
            + self.group2_blocks * self.group2_data_codewords
    }

    pub fn total_ec_codewords(&self) -> usize {
        self.total_blocks() * self.ec_codewords_per_block
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const VERSION_INFO_BIT_LEN: usize = 18;

// Char count indicator width per mode, for versions 1-9, 10-26 and 27-40
static CHAR_CNT_BITS: [[usize; 3]; 4] = [[10, 12, 14], [9, 11, 13], [8, 16, 16], [8, 10, 12]];
