use thiserror::Error;

use super::codec::Mode;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    #[error("Character {ch:?} cannot be encoded in {mode} mode")]
    InvalidInput { ch: char, mode: Mode },

    #[error("Data exceeds the capacity of the largest eligible version")]
    CapacityExceeded,

    #[error("Invalid {field}: {value}")]
    InvalidConfig { field: &'static str, value: usize },

    // Only reachable through a defect in the static tables
    #[error("Codeword count mismatch: Expected {expected}, Actual {actual}")]
    InternalAssembly { expected: usize, actual: usize },
}

pub type QRResult<T> = Result<T, QRError>;
