//! Error types for taglens.
//!
//! One workspace-wide error enum, built with `thiserror` for the
//! `Display`/`Error` impls. The analysis engines themselves are total
//! functions and never return `Err`; errors come from ingestion I/O and
//! from caller contract violations (a zero benchmark run count).

use std::io;
use thiserror::Error;

/// Result type alias for taglens operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for taglens operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (opening or reading a dataset file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Caller supplied an invalid configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Dataset-level failure (missing folder, no CSV files found).
    #[error("dataset error: {0}")]
    Dataset(String),
}
