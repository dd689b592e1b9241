use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

/// Failures that abort a run.
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("cannot read scan root {0}: {1}")]
    RootUnreadable(PathBuf, #[source] io::Error),
    #[error("cannot create output file {0}: {1}")]
    OutputCreate(PathBuf, #[source] io::Error),
    #[error("failed writing output file {0}: {1}")]
    OutputWrite(PathBuf, #[source] io::Error),
    #[error("invalid exclude pattern '{0}': {1}")]
    InvalidGlob(String, #[source] globset::Error),
}

/// Failure to read a single source file. Never aborts a run.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}
