use crate::data_summary::batch_summary::BatchSummary;
use crate::file_creation::file_creation_error::FileCreationError;
use crate::file_creation::json_format::JsonFormat;

use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Serializes a `BatchSummary` into a pretty JSON string tagged with the crate version.
fn generate_report(batch: &BatchSummary) -> Result<String, FileCreationError> {
    let wrapper = JsonFormat {
        version: VERSION,
        batch,
    };
    serde_json::to_string_pretty(&wrapper).map_err(FileCreationError::Serialization)
}

/// Creates the score report for a batch of matches.
///
/// # Arguments
///
/// * `filename` - The path to the file where the JSON will be written.
/// * `batch` - The `BatchSummary` to be included in the report.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `FileCreationError`.
pub fn create_report_file(filename: &Path, batch: &BatchSummary) -> Result<(), FileCreationError> {
    let json_output = generate_report(batch)?;
    write_file(filename, &json_output)?;
    info!(
        "Wrote {} match summaries to {}",
        batch.matches.len(),
        filename.display()
    );
    Ok(())
}

/// Serializes any value as pretty JSON and writes it to `filename`.
pub fn create_json_file<T: Serialize>(filename: &Path, value: &T) -> Result<(), FileCreationError> {
    let json_output = serde_json::to_string_pretty(value).map_err(FileCreationError::Serialization)?;
    write_file(filename, &json_output)
}

fn write_file(filename: &Path, contents: &str) -> Result<(), FileCreationError> {
    let file = File::create(filename).map_err(FileCreationError::FileCreation)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(FileCreationError::FileWrite)?;

    Ok(())
}
