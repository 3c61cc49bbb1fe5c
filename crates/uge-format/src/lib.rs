//! hUGETracker `.uge` song format.
//!
//! This crate decodes and encodes the version 6 layout of the `.uge` files
//! written by hUGETracker and GB Studio. Decoding keeps every field that the
//! encoder needs, so `decode(encode(song)) == song` for any decoded song.
//!
//! # Layout
//!
//! All integers are little-endian. Text fields are Latin-1; the header strings
//! and instrument names are Pascal shortstrings (one length byte followed by
//! 255 bytes), routines are `u32`-prefixed strings.
//!
//! ```text
//! version | name | artist | comment
//! 15 duty instruments | 15 wave instruments | 15 noise instruments
//! 16 waves | ticks per row | timer flag | timer divider
//! patterns | 4 order lists | 16 routines
//! ```
//!
//! # Example
//!
//! ```
//! use uge_format::UgeSong;
//!
//! let mut song = UgeSong::new("Demo");
//! song.wave_instruments[0].length = Some(32);
//!
//! let bytes = song.to_bytes().unwrap();
//! let decoded = UgeSong::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded, song);
//! ```
//!
//! # Module Structure
//!
//! - [`song`]: Song structure and file-level constants
//! - [`instrument`]: Instrument records and pattern cells
//! - [`reader`]: Binary decoder
//! - [`writer`]: Binary encoder
//! - [`error`]: Decode and encode errors

pub mod error;
pub mod instrument;
pub mod reader;
pub mod song;
pub mod writer;

pub use error::{UgeFormatError, UgeWriteError};
pub use instrument::{
    Instrument, InstrumentKind, UgeCell, UGE_CELL_SIZE, UGE_INSTRUMENTS_PER_KIND,
    UGE_INSTRUMENT_RECORD_SIZE, UGE_NO_NOTE, UGE_PATTERN_ROWS,
};
pub use reader::read_song;
pub use song::{
    UgePattern, UgeSong, UGE_CHANNELS, UGE_DEFAULT_TICKS_PER_ROW, UGE_ROUTINE_COUNT,
    UGE_SHORTSTRING_MAX_LEN, UGE_SHORTSTRING_SIZE, UGE_VERSION, UGE_WAVE_COUNT, UGE_WAVE_LENGTH,
};

/// Crate version for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
