//! Batch orchestration.
//!
//! Each file runs through ingest, decode, migrate and encode on its own. The
//! run ends in a [`FileOutcome`]; once every file is done the outcomes are
//! partitioned into a [`BatchOutcome`]. A failure (or a panic inside the
//! codec) only ever affects the file it happened in.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::SongCodec;
use crate::error::FileError;
use crate::ingest::{read_source, SourceFile};
use crate::transform::{migrate_with_summary, MigrationSummary};

/// A successfully migrated file.
///
/// `data` is the encoded song, ready to be saved under `filename`. The caller
/// owns it; nothing in this crate writes or discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigratedFile {
    pub filename: String,
    pub data: Vec<u8>,
    pub summary: MigrationSummary,
}

impl MigratedFile {
    /// BLAKE3 hash of the migrated bytes.
    pub fn content_hash(&self) -> String {
        blake3::hash(&self.data).to_hex().to_string()
    }
}

/// A file that failed to migrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationError {
    pub filename: String,
    /// Stable error code (e.g., "READ_004", "DECODE_001").
    pub code: String,
    pub message: String,
}

impl MigrationError {
    pub fn new(filename: impl Into<String>, error: &FileError) -> Self {
        Self {
            filename: filename.into(),
            code: error.code().to_string(),
            message: error.message(),
        }
    }
}

/// Result of one file's run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Migrated(MigratedFile),
    Failed(MigrationError),
}

/// Results of a whole batch.
///
/// Each list keeps the input order of its files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub migrated: Vec<MigratedFile>,
    pub errors: Vec<MigrationError>,
}

impl BatchOutcome {
    /// Number of files the batch processed.
    pub fn len(&self) -> usize {
        self.migrated.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<FileOutcome> for BatchOutcome {
    fn from_iter<I: IntoIterator<Item = FileOutcome>>(iter: I) -> Self {
        let mut outcome = BatchOutcome::default();
        for item in iter {
            match item {
                FileOutcome::Migrated(file) => outcome.migrated.push(file),
                FileOutcome::Failed(error) => outcome.errors.push(error),
            }
        }
        outcome
    }
}

/// Migrate one file: ingest, decode, remap wave lengths, encode.
pub fn migrate_file<C, S>(codec: &C, source: &S) -> Result<MigratedFile, FileError>
where
    C: SongCodec + ?Sized,
    S: SourceFile + ?Sized,
{
    let raw = read_source(source)?;
    debug!(file = %raw.filename, bytes = raw.bytes.len(), "read file");

    let song = codec.decode(&raw.bytes).map_err(FileError::Decode)?;
    debug!(file = %raw.filename, song = %song.name, "decoded song");

    let (song, summary) = migrate_with_summary(song);
    debug!(
        file = %raw.filename,
        rewritten = summary.rewritten,
        unset = summary.unset,
        "remapped wave lengths"
    );

    let data = codec.encode(&song).map_err(FileError::Encode)?;
    debug!(file = %raw.filename, bytes = data.len(), "encoded song");

    Ok(MigratedFile {
        filename: raw.filename,
        data,
        summary,
    })
}

/// Run [`migrate_file`] for one source and turn the result into an outcome,
/// catching panics raised by the codec.
pub fn run_file<C, S>(codec: &C, source: &S) -> FileOutcome
where
    C: SongCodec + ?Sized,
    S: SourceFile + ?Sized,
{
    let result = catch_unwind(AssertUnwindSafe(|| migrate_file(codec, source)))
        .unwrap_or_else(|payload| Err(FileError::from_panic(payload)));

    match result {
        Ok(file) => FileOutcome::Migrated(file),
        Err(err) => {
            warn!(file = %source.name(), code = err.code(), "migration failed: {}", err);
            FileOutcome::Failed(MigrationError::new(source.name(), &err))
        }
    }
}

/// Migrate every source, one after another.
///
/// Every source produces exactly one entry in either `migrated` or `errors`.
pub fn migrate_batch<C, I>(codec: &C, sources: I) -> BatchOutcome
where
    C: SongCodec + ?Sized,
    I: IntoIterator,
    I::Item: SourceFile,
{
    sources
        .into_iter()
        .map(|source| run_file(codec, &source))
        .collect()
}
