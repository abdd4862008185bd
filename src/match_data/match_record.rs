use crate::match_data::game_length::GameLength;
use crate::match_data::match_error::MatchError;
use crate::match_data::match_state::MatchState;
use crate::match_data::player_stats::PlayerStats;

use serde::{Deserialize, Serialize};

fn default_game_length() -> f64 {
    GameLength::default().minutes()
}

/// On-disk shape of a match: the game length in minutes and the ten player records.
///
/// Unlike `MatchState`, a record is not validated; convert it with `MatchState::try_from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    #[serde(default = "default_game_length")]
    pub game_length: f64,
    pub players: Vec<PlayerStats>,
}

impl TryFrom<MatchRecord> for MatchState {
    type Error = MatchError;

    fn try_from(record: MatchRecord) -> Result<Self, Self::Error> {
        let game_length = GameLength::from_minutes(record.game_length)?;
        MatchState::from_players(game_length, record.players)
    }
}

impl From<&MatchState> for MatchRecord {
    fn from(state: &MatchState) -> Self {
        MatchRecord {
            game_length: state.game_length().minutes(),
            players: state.players().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_data::role::Role;

    fn record_json(game_length: &str, players: usize) -> String {
        let player = r#"{"name":"x","kills":1,"role":"Warrior","topDamageReceivedTeam":true}"#;
        let players = vec![player; players].join(",");
        format!(r#"{{"gameLength":{},"players":[{}]}}"#, game_length, players)
    }

    #[test]
    fn valid_record_becomes_a_match() {
        let record: MatchRecord = serde_json::from_str(&record_json("25", 10)).unwrap();
        let state = MatchState::try_from(record).unwrap();
        assert_eq!(state.game_length().minutes(), 25.0);
        assert_eq!(state.player(7).unwrap().role, Role::Warrior);
        assert_eq!(state.scores()[7].to_string(), "1.50");
    }

    #[test]
    fn missing_game_length_defaults_to_twenty() {
        let record: MatchRecord =
            serde_json::from_str(r#"{"players":[]}"#).unwrap();
        assert_eq!(record.game_length, 20.0);
    }

    #[test]
    fn zero_game_length_is_rejected() {
        let record: MatchRecord = serde_json::from_str(&record_json("0", 10)).unwrap();
        assert_eq!(
            MatchState::try_from(record),
            Err(MatchError::InvalidGameLength(0.0))
        );
    }

    #[test]
    fn wrong_player_count_is_rejected() {
        let record: MatchRecord = serde_json::from_str(&record_json("20", 11)).unwrap();
        assert!(matches!(
            MatchState::try_from(record),
            Err(MatchError::WrongPlayerCount { found: 11, .. })
        ));
    }

    #[test]
    fn state_converts_back_to_the_same_record() {
        let record: MatchRecord = serde_json::from_str(&record_json("30", 10)).unwrap();
        let state = MatchState::try_from(record.clone()).unwrap();
        assert_eq!(MatchRecord::from(&state), record);
    }
}
