use crate::data_summary::batch_summary::BatchSummary;
use serde::Serialize;

/// Wrapper structure for serializing a `BatchSummary` with the version of the tool
/// that produced it.
///
/// # Fields
///
/// * `version` - Crate version that computed the scores.
/// * `batch` - The `BatchSummary` data, flattened into the JSON object.
#[derive(Serialize, Debug)]
pub struct JsonFormat<'a> {
    pub(crate) version: &'static str,
    #[serde(flatten)]
    pub(crate) batch: &'a BatchSummary,
}
