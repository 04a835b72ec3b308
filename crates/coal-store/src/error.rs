//! Error types for event and histogram file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing store files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// File does not start with the expected magic bytes.
    #[error("not a {expected} file: bad magic")]
    BadMagic { expected: &'static str },

    /// File version this reader does not understand.
    #[error("unsupported {kind} file version {version}")]
    UnsupportedVersion { kind: &'static str, version: u32 },

    /// Event index past the end of the file.
    #[error("event index {index} out of range (file holds {count} events)")]
    EventOutOfRange { index: usize, count: usize },

    /// An event record that cannot be decoded. Local to one event;
    /// callers are expected to count and skip.
    #[error("malformed event record {index}: {message}")]
    MalformedEvent { index: usize, message: String },

    /// A histogram record that cannot be decoded.
    #[error("malformed histogram record {index}: {message}")]
    MalformedHistogram { index: usize, message: String },

    /// Requested histogram is absent from the file.
    #[error("histogram not found: {name}")]
    HistogramNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;
