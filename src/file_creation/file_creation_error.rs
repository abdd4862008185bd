use std::io;
use thiserror::Error;

/// Errors that may occur during file creation.
///
/// # Variants
///
/// * `Serialization` - An error occurred while serializing data.
/// * `FileCreation` - An error occurred while creating the file.
/// * `FileWrite` - An error occurred while writing to the file.
#[derive(Debug, Error)]
pub enum FileCreationError {
    #[error("failed to serialize output: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("failed to create output file: {0}")]
    FileCreation(#[source] io::Error),
    #[error("failed to write output file: {0}")]
    FileWrite(#[source] io::Error),
}
