//! Error type

use std::path::PathBuf;
use thiserror::Error;

/// Result type with the `perfgate` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Performance gate errors.
///
/// Neither an invalid signature nor an exceeded budget is an error: both are
/// reported through [`Report`][`crate::Report`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed verification input or an internal arithmetic failure.
    #[error(transparent)]
    Verify(#[from] weierstrass::Error),

    /// Budget file is not a JSON object of curve names to microseconds.
    #[error("invalid budget: {0}")]
    Json(#[from] serde_json::Error),

    /// Budget environment variable is not an unsigned integer.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,

        /// Offending value.
        value: String,
    },

    /// Budget file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the budget file.
        path: PathBuf,

        /// Underlying I/O error.
        source: std::io::Error,
    },
}
