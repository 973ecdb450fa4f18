//! Crate error type.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the propagating helpers (`read_file`, `write_file`,
/// `write_json`, `load_value`, `remove`).
///
/// Both variants carry the path the operation was working on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("JSON error in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
