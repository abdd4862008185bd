use crate::match_data::role::Role;
use crate::match_data::team::Team;
use crate::scoring::mvp_score::MvpScore;

use serde::Serialize;

/// One player's line in a match summary.
///
/// # Fields
///
/// * `slot` - Position of the player in the match, `0..PLAYERS_PER_MATCH`.
/// * `team` - The team of that slot.
/// * `name` - The player's display name.
/// * `role` - The player's role.
/// * `score` - The MVP score, serialized as a two-decimal string.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerScoreSummary {
    pub slot: usize,
    pub team: Team,
    pub name: String,
    pub role: Role,
    pub score: MvpScore,
}
