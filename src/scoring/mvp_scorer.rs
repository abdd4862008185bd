use crate::match_data::game_length::GameLength;
use crate::match_data::player_stats::PlayerStats;
use crate::match_data::role::Role;
use crate::match_data::superlative::Superlative;
use crate::scoring::mvp_score::MvpScore;

const DEATH_TIME_PERCENT: f64 = 100.0;
const DEATH_TIME_WEIGHT: f64 = -0.5;
const SUPERLATIVE_BONUS: f64 = 1.0;
const WARRIOR_TEAM_DAMAGE_RECEIVED_BONUS: f64 = 0.5;
const WARRIOR_MATCH_DAMAGE_RECEIVED_BONUS: f64 = 1.0;

/// Computes a player's MVP score for a match.
///
/// The score is the sum of kills, assists, a death-time penalty, one point per
/// unconditional superlative flag, and the warrior-only damage-received bonuses.
/// The death-time penalty divides `time_spent_dead` as entered by the game length in
/// seconds, so a form value labelled minutes is compared against seconds.
///
/// Terms are added in a fixed order so the floating-point result is reproducible.
///
/// # Arguments
///
/// * `stats` - The player's record.
/// * `game_length` - Duration of the match.
///
/// # Returns
///
/// The `MvpScore`; always finite since `GameLength` is positive and time dead is finite.
pub fn score(stats: &PlayerStats, game_length: GameLength) -> MvpScore {
    let game_length_seconds = game_length.seconds();
    let mut mvp_score = 0.0;

    mvp_score += f64::from(stats.kills);
    mvp_score += f64::from(stats.assists);
    mvp_score +=
        (stats.time_spent_dead / game_length_seconds) * DEATH_TIME_PERCENT * DEATH_TIME_WEIGHT;

    for flag in Superlative::UNCONDITIONAL {
        if flag.is_set(stats) {
            mvp_score += SUPERLATIVE_BONUS;
        }
    }

    if stats.role == Role::Warrior && stats.top_damage_received_team {
        mvp_score += WARRIOR_TEAM_DAMAGE_RECEIVED_BONUS;
    }
    if stats.role == Role::Warrior && stats.top_damage_received_match {
        mvp_score += WARRIOR_MATCH_DAMAGE_RECEIVED_BONUS;
    }

    MvpScore::new(mvp_score)
}
