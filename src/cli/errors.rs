use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{path:?} is not an AGC grid: {reason}")]
    NotAgc { path: PathBuf, reason: String },

    #[error("invalid region `{value}`: {reason}")]
    InvalidRegion { value: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("grid error: {0}")]
    Grid(#[from] agcgrid::Error),
}
