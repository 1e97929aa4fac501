//! Error type for failures outside the validation result model.
//!
//! Schema violations, missing fields and stale dates are *never* reported
//! through [`Error`]; they are entries in a
//! [`ValidationResult`](crate::validator::ValidationResult). This type covers
//! the exceptional paths only: I/O, unsupported inputs, configuration and
//! prompt failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown file type: {0}")]
    UnknownFileType(String),
    #[error("{0}")]
    Config(String),
    #[error("prompt failed: {0}")]
    Prompt(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
