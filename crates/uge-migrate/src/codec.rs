//! Song codec interface.
//!
//! The orchestrator only needs to turn bytes into a [`UgeSong`] and back, so
//! the codec is injected through [`SongCodec`]. [`UgeCodec`] is the real
//! binary format; tests substitute in-memory fakes.

use uge_format::UgeSong;

/// Error type returned by codecs. Only its message is kept in reports.
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Decodes and encodes songs.
///
/// `encode` must be a left inverse of `decode` for any song produced by
/// `decode`, with or without the migration applied.
pub trait SongCodec {
    fn decode(&self, bytes: &[u8]) -> Result<UgeSong, CodecError>;

    fn encode(&self, song: &UgeSong) -> Result<Vec<u8>, CodecError>;
}

impl<C: SongCodec + ?Sized> SongCodec for &C {
    fn decode(&self, bytes: &[u8]) -> Result<UgeSong, CodecError> {
        (**self).decode(bytes)
    }

    fn encode(&self, song: &UgeSong) -> Result<Vec<u8>, CodecError> {
        (**self).encode(song)
    }
}

/// The hUGETracker v6 binary codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct UgeCodec;

impl SongCodec for UgeCodec {
    fn decode(&self, bytes: &[u8]) -> Result<UgeSong, CodecError> {
        Ok(UgeSong::from_bytes(bytes)?)
    }

    fn encode(&self, song: &UgeSong) -> Result<Vec<u8>, CodecError> {
        Ok(song.to_bytes()?)
    }
}
