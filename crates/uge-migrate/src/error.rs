//! Per-file error taxonomy.

use std::any::Any;

use thiserror::Error;

use crate::codec::CodecError;
use crate::ingest::ReadError;

/// Message used when a failure carries no text of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Stable error codes for per-file failures that are not read errors.
pub mod error_codes {
    /// The codec could not decode the file.
    pub const DECODE: &str = "DECODE_001";
    /// The codec could not encode the migrated song.
    pub const ENCODE: &str = "ENCODE_001";
    /// A failure with no usable description.
    pub const UNKNOWN: &str = "UNKNOWN_001";
}

/// Why one file failed to migrate.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file's bytes could not be obtained.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The bytes are not a valid song.
    #[error("{0}")]
    Decode(CodecError),

    /// The migrated song could not be encoded.
    #[error("{0}")]
    Encode(CodecError),

    /// Anything else, including a panic inside the codec.
    #[error("{}", unknown_message(.0))]
    Unknown(Option<String>),
}

fn unknown_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or(UNKNOWN_ERROR_MESSAGE)
}

impl FileError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            FileError::Read(err) => err.code(),
            FileError::Decode(_) => error_codes::DECODE,
            FileError::Encode(_) => error_codes::ENCODE,
            FileError::Unknown(_) => error_codes::UNKNOWN,
        }
    }

    /// Human-readable message: the cause's own text, or
    /// [`UNKNOWN_ERROR_MESSAGE`] when that text is empty.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Build an error from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => Some(*message),
            Err(payload) => payload.downcast_ref::<&str>().map(|s| s.to_string()),
        };
        FileError::Unknown(message)
    }
}
