//! GB Studio `.uge` wave length migration.
//!
//! GB Studio 3.2.1 and below saved wave instrument lengths in a form that
//! hUGETracker (and GB Studio 3.3.0 onwards) reads differently. This crate
//! rewrites a batch of songs to the corrected convention.
//!
//! # Pipeline
//!
//! For each file, in order:
//!
//! 1. [`ingest::read_source`] reads the file into memory.
//! 2. [`codec::SongCodec::decode`] turns the bytes into a [`UgeSong`].
//! 3. [`transform::migrate`] remaps every set wave instrument length to `256 - length`.
//! 4. [`codec::SongCodec::encode`] turns the song back into bytes.
//!
//! Failures at any step are recorded for that file only; the batch always
//! finishes and reports one outcome per input.
//!
//! # Example
//!
//! ```
//! use uge_migrate::{migrate_batch, MemoryFile, UgeCodec, UgeSong};
//!
//! let mut song = UgeSong::new("Demo");
//! song.wave_instruments[0].length = Some(10);
//!
//! let files = vec![
//!     MemoryFile::binary("demo.uge", song.to_bytes().unwrap()),
//!     MemoryFile::binary("broken.uge", b"garbage".to_vec()),
//! ];
//! let outcome = migrate_batch(&UgeCodec, files);
//!
//! assert_eq!(outcome.migrated.len(), 1);
//! assert_eq!(outcome.errors[0].filename, "broken.uge");
//! ```

pub mod batch;
pub mod codec;
pub mod error;
pub mod ingest;
pub mod transform;

pub use batch::{migrate_batch, migrate_file, run_file, BatchOutcome, FileOutcome, MigratedFile, MigrationError};
pub use codec::{CodecError, SongCodec, UgeCodec};
pub use error::{FileError, UNKNOWN_ERROR_MESSAGE};
pub use ingest::{read_source, DiskFile, FileContents, MemoryFile, RawFile, ReadError, SourceFile};
pub use transform::{migrate, migrate_with_summary, MigrationSummary, LENGTH_PIVOT, MAX_WAVE_LENGTH};
pub use uge_format::UgeSong;

/// Crate version for diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
