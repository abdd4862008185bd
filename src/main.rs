use mvp_calculator::data_processing::data_processor::{load_match_file, process_matches_in_parallel};
use mvp_calculator::data_summary::match_summarizer::summarize;
use mvp_calculator::file_creation::file_creator::{create_json_file, create_report_file};
use mvp_calculator::form_input::form_edit::FormEdit;
use mvp_calculator::match_data::match_record::MatchRecord;
use mvp_calculator::screenshot::stats_extractor::extract_from_file;
use mvp_calculator::screenshot::text_recognizer::TranscriptRecognizer;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mvp_calculator")]
#[command(about = "Computes MVP scores for 5v5 matches")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a match file, or every .json match file in a directory
    Score {
        /// Match file or directory of match files
        input: PathBuf,

        /// Number of threads used to score matches
        #[arg(short, long, default_value_t = 4)]
        threads: usize,

        /// Report file
        #[arg(short, long, default_value = "mvp_report.json")]
        output: PathBuf,

        /// Form edit applied to every match before scoring, e.g. `3.kills=7` or `gameLength=25`
        #[arg(long = "set", value_name = "SLOT.FIELD=VALUE|gameLength=MINUTES")]
        edits: Vec<FormEdit>,
    },
    /// Pre-fill names, kills and assists of a match from a recognized screenshot
    Prefill {
        /// Match file to start from
        match_file: PathBuf,

        /// Recognized scoreboard text
        #[arg(long)]
        screenshot: PathBuf,

        /// Where to write the pre-filled match
        #[arg(short, long, default_value = "prefilled_match.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    match Cli::parse().command {
        Command::Score {
            input,
            threads,
            output,
            edits,
        } => score(&input, threads, &output, &edits),
        Command::Prefill {
            match_file,
            screenshot,
            output,
        } => prefill(&match_file, &screenshot, &output),
    }
}

fn score(input: &Path, threads: usize, output: &Path, edits: &[FormEdit]) -> Result<()> {
    let batch = process_matches_in_parallel(input, threads, edits);
    for (name, summary) in &batch.matches {
        info!(
            "{}: MVP {} ({}) with {}",
            name, summary.mvp.name, summary.mvp.team, summary.mvp.score
        );
    }
    create_report_file(output, &batch)
        .with_context(|| format!("writing report {}", output.display()))
}

fn prefill(match_file: &Path, screenshot: &Path, output: &Path) -> Result<()> {
    let state = load_match_file(match_file)
        .with_context(|| format!("loading match {}", match_file.display()))?;

    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    let extracted = runtime
        .block_on(async {
            let mut recognizer = TranscriptRecognizer::new();
            extract_from_file(&mut recognizer, screenshot).await
        })
        .with_context(|| format!("extracting players from {}", screenshot.display()))?;
    info!("Recognized {} player rows", extracted.len());

    let state = state.prefill(&extracted);
    let summary = summarize(&state);
    info!(
        "MVP after pre-fill: {} ({}) with {}",
        summary.mvp.name, summary.mvp.team, summary.mvp.score
    );

    create_json_file(output, &MatchRecord::from(&state))
        .with_context(|| format!("writing match {}", output.display()))
}
