use std::io;
use thiserror::Error;

/// Errors that may occur while extracting player rows from a screenshot.
///
/// # Variants
///
/// * `ImageRead` - The image file could not be read.
/// * `Recognition` - The recognizer failed to produce text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read image: {0}")]
    ImageRead(#[from] io::Error),
    #[error("text recognition failed: {0}")]
    Recognition(String),
}
