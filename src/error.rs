//! Crate-level error type and `Result` alias for stable, structured error handling.
//! One variant per failure class at the AGC codec boundary, plus an I/O
//! passthrough for errors that carry no format-level meaning.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {}: {source}", path.display())]
    OpenFailed { path: PathBuf, source: std::io::Error },

    #[error("failed to create {}: {source}", path.display())]
    CreateFailed { path: PathBuf, source: std::io::Error },

    #[error("failed to stat {}: {source}", path.display())]
    StatFailed { path: PathBuf, source: std::io::Error },

    #[error("`{0}` is not supported on a non-seekable stream")]
    UnsupportedStream(&'static str),

    #[error("bad value: {0}")]
    BadValue(String),

    #[error("read failed: {0}")]
    ReadFailed(String),

    #[error("write failed: {0}")]
    WriteFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn bad_value<S: Into<String>>(msg: S) -> Self {
        Error::BadValue(msg.into())
    }
}
