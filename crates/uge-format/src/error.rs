//! Error types for reading and writing UGE files.

use thiserror::Error;

/// Error produced when bytes do not decode as a UGE song.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UgeFormatError {
    /// The version word is not one this crate understands.
    #[error("UGE version {version} is not supported (expected {expected})")]
    UnsupportedVersion { version: u32, expected: u32 },

    /// The data ended in the middle of a field.
    #[error("Unexpected end of data at offset {offset} while reading {field}")]
    Truncated { offset: usize, field: String },

    /// An instrument record carries the wrong type code for its slot.
    /// `number` is 1-based, as shown in the tracker.
    #[error("Instrument {number} in the {expected} block has type code {found}")]
    InstrumentTypeMismatch {
        number: usize,
        expected: &'static str,
        found: u32,
    },

    /// A count field claims more entries than the remaining data can hold.
    #[error("{field} count {count} exceeds the remaining {remaining} bytes")]
    CountTooLarge {
        field: &'static str,
        count: u32,
        remaining: usize,
    },
}

impl UgeFormatError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            UgeFormatError::UnsupportedVersion { .. } => "UGE_001",
            UgeFormatError::Truncated { .. } => "UGE_002",
            UgeFormatError::InstrumentTypeMismatch { .. } => "UGE_003",
            UgeFormatError::CountTooLarge { .. } => "UGE_004",
        }
    }
}

/// Error produced when a song cannot be encoded.
#[derive(Debug, Error)]
pub enum UgeWriteError {
    /// A fixed-size collection has the wrong number of entries.
    #[error("Expected {expected} {field}, found {found}")]
    WrongCount {
        field: String,
        expected: usize,
        found: usize,
    },

    /// A shortstring field is longer than 255 bytes.
    #[error("{field} is {len} characters long (maximum 255)")]
    StringTooLong { field: String, len: usize },

    /// A string contains a character outside Latin-1.
    #[error("{field} contains {ch:?}, which cannot be stored in a UGE file")]
    UnencodableChar { field: String, ch: char },

    /// A variable-length field does not fit its `u32` length prefix.
    #[error("{field} is too large to encode (length {len})")]
    TooLarge { field: String, len: usize },

    /// The underlying writer failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl UgeWriteError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            UgeWriteError::WrongCount { .. } => "UGE_101",
            UgeWriteError::StringTooLong { .. } => "UGE_102",
            UgeWriteError::UnencodableChar { .. } => "UGE_103",
            UgeWriteError::TooLarge { .. } => "UGE_104",
            UgeWriteError::Io(_) => "UGE_105",
        }
    }
}
