use crate::data_summary::player_score_summary::PlayerScoreSummary;

use serde::Serialize;

/// Scores of a whole match, best first.
///
/// # Fields
///
/// * `game_length_minutes` - The match duration used for scoring.
/// * `mvp` - The best-scoring player of the match.
/// * `red_team_mvp`, `blue_team_mvp` - The best-scoring player of each team.
/// * `ranking` - Every player, by score descending; equal scores keep slot order.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub game_length_minutes: f64,
    pub mvp: PlayerScoreSummary,
    pub red_team_mvp: PlayerScoreSummary,
    pub blue_team_mvp: PlayerScoreSummary,
    pub ranking: Vec<PlayerScoreSummary>,
}
