/// Error types for the core crate.
///
/// None of these abort a scan half-way: per-file and per-directory failures
/// are recovered inside the scanner and only surface as counters and
/// `ScanProgress::Error` messages.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The cancel flag was raised before the scan finished.
    #[error("scan cancelled")]
    Cancelled,

    #[error("failed to build probe thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to spawn scanner thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("scanner thread panicked")]
    Panicked,
}

/// A directory whose listing could not be read. Its subtree is skipped.
#[derive(Debug, Error)]
#[error("cannot read {}: {message}", .path.display())]
pub struct WalkError {
    pub path: PathBuf,
    pub message: String,
}

/// Invalid signature table or signature file.
#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("failed to read signature file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed signature file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("signature {label:?} has invalid hex magic: {source}")]
    InvalidHex {
        label: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("signature {label:?} has an empty magic sequence")]
    EmptyMagic { label: String },

    #[error("signature at position {index} has an empty label")]
    EmptyLabel { index: usize },

    #[error("signature table is empty")]
    EmptyTable,
}

/// Failure while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}
