use crate::match_data::player_stats::PlayerStats;
use crate::screenshot::extraction_error::ExtractionError;
use crate::screenshot::text_recognizer::TextRecognizer;

use log::{debug, error};
use std::path::Path;

const MIN_TOKENS_PER_ROW: usize = 4;

/// Reads an image file and extracts player rows from it.
///
/// The recognizer is terminated even if the file cannot be read.
///
/// # Arguments
///
/// * `recognizer` - The engine to use; it is terminated before returning.
/// * `path` - Path to the screenshot.
///
/// # Returns
///
/// Partial `PlayerStats` rows (see `parse_recognized_text`), or the first failure.
pub async fn extract_from_file<R: TextRecognizer>(
    recognizer: &mut R,
    path: &Path,
) -> Result<Vec<PlayerStats>, ExtractionError> {
    match tokio::fs::read(path).await {
        Ok(image) => extract(recognizer, &image).await,
        Err(err) => {
            error!("Error reading image {}: {}", path.display(), err);
            recognizer.terminate().await;
            Err(ExtractionError::ImageRead(err))
        }
    }
}

/// Runs text recognition on an image and extracts player rows from the text.
///
/// There is no retry and no partial result: a recognition failure is returned after
/// the recognizer has been terminated.
pub async fn extract<R: TextRecognizer>(
    recognizer: &mut R,
    image: &[u8],
) -> Result<Vec<PlayerStats>, ExtractionError> {
    let recognized = recognizer.recognize(image).await;
    recognizer.terminate().await;

    match recognized {
        Ok(text) => {
            let players = parse_recognized_text(&text);
            debug!("Extracted {} player rows", players.len());
            Ok(players)
        }
        Err(err) => {
            error!("Error processing image: {}", err);
            Err(err)
        }
    }
}

/// Builds partial player records from recognized scoreboard text.
///
/// Every non-blank line with at least four tokens becomes a player: token 0 is the
/// name, tokens 1 and 2 the kills and assists. All other fields keep their defaults.
/// Lines with fewer tokens are skipped. See `split_tokens` for how blanks at the edges
/// of a line count.
pub fn parse_recognized_text(text: &str) -> Vec<PlayerStats> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<PlayerStats> {
    let tokens = split_tokens(line);
    if tokens.len() < MIN_TOKENS_PER_ROW {
        return None;
    }

    Some(PlayerStats {
        name: tokens[0].to_owned(),
        kills: parse_stat_token(tokens[1]),
        assists: parse_stat_token(tokens[2]),
        ..PlayerStats::default()
    })
}

/// Splits a line on runs of whitespace. Leading or trailing blanks (including a `\r`
/// left by a CRLF line ending) yield an empty token at that edge, so a leading blank
/// shifts the columns and a trailing one adds a token.
fn split_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    if line.starts_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens.extend(line.split_whitespace());
    if line.ends_with(char::is_whitespace) {
        tokens.push("");
    }
    tokens
}

/// Reads the leading number of an OCR token, tolerating a decimal comma.
///
/// Unreadable tokens count as 0, fractions are truncated and negatives clamp to 0.
fn parse_stat_token(token: &str) -> u32 {
    let normalized = token.replacen(',', ".", 1);
    let prefix_len = numeric_prefix_len(&normalized);
    normalized[..prefix_len]
        .parse::<f64>()
        .map(|value| value as u32)
        .unwrap_or(0)
}

fn numeric_prefix_len(token: &str) -> usize {
    let mut seen_dot = false;
    let mut len = 0;
    for (index, c) in token.char_indices() {
        match c {
            '+' | '-' if index == 0 => {}
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        len = index + c.len_utf8();
    }
    len
}
