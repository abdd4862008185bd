use crate::data_summary::match_summary::MatchSummary;

use serde::Serialize;
use std::collections::BTreeMap;

/// Result of scoring several match files.
///
/// # Fields
///
/// * `matches` - Summaries keyed by the match file name.
/// * `skipped` - Names of files that could not be read or were not valid matches.
#[derive(Serialize, Debug, Default)]
pub struct BatchSummary {
    pub matches: BTreeMap<String, MatchSummary>,
    pub skipped: Vec<String>,
}
