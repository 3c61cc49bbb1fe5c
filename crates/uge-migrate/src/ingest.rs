//! File ingestion - turns a host file handle into an owned byte buffer.
//!
//! The host read is a single blocking call on [`SourceFile`]. Its result is
//! checked here so that every way a read can go wrong (I/O failure, nothing to
//! read, text instead of bytes, zero bytes) surfaces as its own [`ReadError`]
//! instead of reaching the decoder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// What the host handed back from a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    /// Raw bytes.
    Binary(Vec<u8>),
    /// Decoded text. Never valid input for the migrator.
    Text(String),
}

/// A named file the host can read.
pub trait SourceFile {
    /// File name as shown to the user. Passed through to the results unchanged.
    fn name(&self) -> &str;

    /// Read the whole file.
    ///
    /// `Ok(None)` means the handle has no readable target.
    fn read(&self) -> io::Result<Option<FileContents>>;
}

/// Error returned when a file's bytes cannot be obtained.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The host reported an I/O failure.
    #[error("File could not be read: {0}")]
    Io(#[from] io::Error),

    /// The handle did not point at anything readable.
    #[error("No readable target found for file")]
    NoTarget,

    /// The host returned text instead of bytes.
    #[error("File reader didn't get a binary buffer")]
    NotBinary,

    /// The file is zero bytes long.
    #[error("File is empty")]
    Empty,
}

impl ReadError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            ReadError::Io(_) => "READ_001",
            ReadError::NoTarget => "READ_002",
            ReadError::NotBinary => "READ_003",
            ReadError::Empty => "READ_004",
        }
    }
}

/// An ingested file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Read a source into a [`RawFile`]. A failed read is not retried.
pub fn read_source<S: SourceFile + ?Sized>(source: &S) -> Result<RawFile, ReadError> {
    let bytes = match source.read()? {
        None => return Err(ReadError::NoTarget),
        Some(FileContents::Text(_)) => return Err(ReadError::NotBinary),
        Some(FileContents::Binary(bytes)) => bytes,
    };

    if bytes.is_empty() {
        return Err(ReadError::Empty);
    }

    Ok(RawFile {
        filename: source.name().to_string(),
        bytes,
    })
}

/// A file on disk.
#[derive(Debug, Clone)]
pub struct DiskFile {
    path: PathBuf,
    name: String,
}

impl DiskFile {
    /// Create a handle for `path`. The name is the path's final component.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceFile for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> io::Result<Option<FileContents>> {
        if !fs::metadata(&self.path)?.is_file() {
            return Ok(None);
        }
        fs::read(&self.path).map(|bytes| Some(FileContents::Binary(bytes)))
    }
}

/// A file held in memory, for embedders that already have the contents.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    contents: Option<FileContents>,
}

impl MemoryFile {
    /// A file holding bytes.
    pub fn binary(name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.to_string(),
            contents: Some(FileContents::Binary(bytes.into())),
        }
    }

    /// A file the host delivered as text.
    pub fn text(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            contents: Some(FileContents::Text(text.to_string())),
        }
    }

    /// A handle with nothing behind it.
    pub fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            contents: None,
        }
    }
}

impl SourceFile for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> io::Result<Option<FileContents>> {
        Ok(self.contents.clone())
    }
}
