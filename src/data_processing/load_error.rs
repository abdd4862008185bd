use crate::match_data::match_error::MatchError;

use std::io;
use thiserror::Error;

/// Errors that may occur while loading a match file.
///
/// # Variants
///
/// * `Read` - The file could not be read.
/// * `Parse` - The file is not a JSON match record.
/// * `Invalid` - The record was parsed but is not a valid match.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read match file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse match file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid match: {0}")]
    Invalid(#[from] MatchError),
}
