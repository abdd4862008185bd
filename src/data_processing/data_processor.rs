use crate::data_processing::load_error::LoadError;
use crate::data_summary::batch_summary::BatchSummary;
use crate::data_summary::match_summarizer::summarize;
use crate::data_summary::match_summary::MatchSummary;
use crate::form_input::form_edit::FormEdit;
use crate::match_data::match_record::MatchRecord;
use crate::match_data::match_state::MatchState;

use log::{debug, error, warn};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use std::fs::{read_dir, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Scores every match found at `input_path` in parallel.
///
/// # Arguments
///
/// * `input_path` - A match file, or a directory whose `.json` files are matches.
/// * `num_threads` - The number of threads to use for parallel processing.
/// * `edits` - Form edits applied, in order, to every match before scoring.
///
/// # Returns
///
/// A `BatchSummary` with one summary per valid match and the names of skipped files.
pub fn process_matches_in_parallel(
    input_path: &Path,
    num_threads: usize,
    edits: &[FormEdit],
) -> BatchSummary {
    let thread_pool = match ThreadPoolBuilder::new().num_threads(num_threads).build() {
        Ok(pool) => pool,
        Err(err) => {
            error!("Error creating thread pool: {}", err);
            return BatchSummary::default();
        }
    };

    thread_pool.install(|| {
        let paths = collect_match_files(input_path);

        paths
            .par_iter()
            .map(|path| (file_key(path), process_file(path, edits)))
            .collect::<Vec<_>>()
            .into_iter()
            .fold(BatchSummary::default(), merge_result)
    })
}

/// Collects the match files to process.
///
/// A file path is returned as-is; a directory yields its `.json` files sorted by name.
/// If the directory cannot be read, an error is logged and no file is returned.
fn collect_match_files(input_path: &Path) -> Vec<PathBuf> {
    if !input_path.is_dir() {
        return vec![input_path.to_path_buf()];
    }

    match read_dir(input_path) {
        Ok(dir) => {
            let mut paths: Vec<PathBuf> = dir
                .flatten()
                .map(|d| d.path())
                .filter(|path| path.is_file())
                .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
                .collect();
            paths.sort();
            paths
        }
        Err(err) => {
            error!("Error reading directory {}: {}", input_path.display(), err);
            Vec::new()
        }
    }
}

/// Loads a match file and validates it.
///
/// # Arguments
///
/// * `path` - Path to a JSON match record.
///
/// # Returns
///
/// * `Ok(MatchState)` - The validated match.
/// * `Err(LoadError)` - If the file cannot be read, parsed or validated.
pub fn load_match_file(path: &Path) -> Result<MatchState, LoadError> {
    let reader = BufReader::new(File::open(path)?);
    let record: MatchRecord = serde_json::from_reader(reader)?;
    Ok(MatchState::try_from(record)?)
}

/// Loads one match, applies the edits and summarizes it.
fn process_file(path: &Path, edits: &[FormEdit]) -> Result<MatchSummary, LoadError> {
    debug!("Processing {}", path.display());
    let state = edits
        .iter()
        .cloned()
        .try_fold(load_match_file(path)?, |state, edit| edit.apply(state))?;
    Ok(summarize(&state))
}

fn file_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Adds one file's outcome to the batch; failures are logged and recorded as skipped.
fn merge_result(
    mut batch: BatchSummary,
    (key, result): (String, Result<MatchSummary, LoadError>),
) -> BatchSummary {
    match result {
        Ok(summary) => {
            batch.matches.insert(key, summary);
        }
        Err(err) => {
            warn!("Skipping {}: {}", key, err);
            batch.skipped.push(key);
        }
    }
    batch
}
