//! Errors returned while configuring an alignment.
//!
//! Alignment itself never fails: degenerate inputs yield an empty result.

use thiserror::Error;

use crate::options::{AlignOptionsBuilderError, HighlightOptionsBuilderError};

#[derive(Debug, Error)]
/// Errors returned by quickblast
pub enum Error {
    /// A token pattern did not compile
    #[error("Invalid token pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// Reading an input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Options failed validation
    #[error("Invalid options: {0}")]
    Options(String),
}

impl From<AlignOptionsBuilderError> for Error {
    fn from(err: AlignOptionsBuilderError) -> Self {
        Error::Options(err.to_string())
    }
}

impl From<HighlightOptionsBuilderError> for Error {
    fn from(err: HighlightOptionsBuilderError) -> Self {
        Error::Options(err.to_string())
    }
}
