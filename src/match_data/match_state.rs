use crate::match_data::game_length::GameLength;
use crate::match_data::match_error::MatchError;
use crate::match_data::player_stats::PlayerStats;
use crate::match_data::role::Role;
use crate::match_data::superlative::Superlative;
use crate::match_data::team::Team;
use crate::scoring::mvp_score::MvpScore;
use crate::scoring::mvp_scorer::score;
use crate::PLAYERS_PER_MATCH;

use log::debug;

/// A single change to one player's record, as made through one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEdit {
    Name(String),
    Kills(u32),
    Assists(u32),
    TimeSpentDead(f64),
    Role(Role),
    Superlative(Superlative, bool),
}

/// Everything entered for one match: the shared game length and one record per slot.
///
/// The state is a value: every update consumes it and returns the next state, and
/// scores are computed from it on demand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchState {
    game_length: GameLength,
    players: [PlayerStats; PLAYERS_PER_MATCH],
}

impl MatchState {
    /// Creates a match with ten empty player records.
    pub fn new(game_length: GameLength) -> Self {
        MatchState {
            game_length,
            players: Default::default(),
        }
    }

    /// Creates a match from existing records, checking every slot's time dead.
    ///
    /// # Arguments
    ///
    /// * `game_length` - Duration of the match.
    /// * `players` - Exactly one record per slot, red team first.
    ///
    /// # Returns
    ///
    /// * `Ok(MatchState)` - When there are `PLAYERS_PER_MATCH` records with valid values.
    /// * `Err(MatchError)` - `WrongPlayerCount` or `InvalidTimeSpentDead` otherwise.
    pub fn from_players(
        game_length: GameLength,
        players: Vec<PlayerStats>,
    ) -> Result<Self, MatchError> {
        let found = players.len();
        let players: [PlayerStats; PLAYERS_PER_MATCH] =
            players
                .try_into()
                .map_err(|_| MatchError::WrongPlayerCount {
                    expected: PLAYERS_PER_MATCH,
                    found,
                })?;

        for (slot, stats) in players.iter().enumerate() {
            check_time_spent_dead(slot, stats.time_spent_dead)?;
        }

        Ok(MatchState {
            game_length,
            players,
        })
    }

    pub fn game_length(&self) -> GameLength {
        self.game_length
    }

    pub fn players(&self) -> &[PlayerStats] {
        &self.players
    }

    pub fn player(&self, slot: usize) -> Option<&PlayerStats> {
        self.players.get(slot)
    }

    pub fn team_of(slot: usize) -> Team {
        Team::for_slot(slot)
    }

    /// Slots and records of one team, in slot order.
    pub fn team_players(&self, team: Team) -> impl Iterator<Item = (usize, &PlayerStats)> {
        self.players
            .iter()
            .enumerate()
            .filter(move |(slot, _)| Team::for_slot(*slot) == team)
    }

    pub fn with_game_length(self, game_length: GameLength) -> Self {
        MatchState {
            game_length,
            ..self
        }
    }

    /// Returns the state with one field of one player replaced.
    ///
    /// Changing the role leaves the damage-received flags untouched; the scorer ignores
    /// them for non-warriors.
    ///
    /// # Arguments
    ///
    /// * `slot` - Index of the player, `0..PLAYERS_PER_MATCH`.
    /// * `edit` - The field and its new value.
    ///
    /// # Returns
    ///
    /// * `Ok(MatchState)` - The updated state.
    /// * `Err(MatchError)` - If the slot does not exist or the new time dead is invalid.
    pub fn with_player_edit(mut self, slot: usize, edit: PlayerEdit) -> Result<Self, MatchError> {
        if slot >= PLAYERS_PER_MATCH {
            return Err(MatchError::SlotOutOfRange(slot));
        }
        if let PlayerEdit::TimeSpentDead(value) = edit {
            check_time_spent_dead(slot, value)?;
        }

        debug!("Editing slot {}: {:?}", slot, edit);
        let player = &mut self.players[slot];
        match edit {
            PlayerEdit::Name(name) => player.name = name,
            PlayerEdit::Kills(kills) => player.kills = kills,
            PlayerEdit::Assists(assists) => player.assists = assists,
            PlayerEdit::TimeSpentDead(value) => player.time_spent_dead = value,
            PlayerEdit::Role(role) => player.role = role,
            PlayerEdit::Superlative(flag, value) => flag.set(player, value),
        }

        Ok(self)
    }

    /// Copies name, kills and assists from extracted rows into the slots in order.
    ///
    /// Rows beyond the last slot are ignored and every other field keeps its value.
    pub fn prefill(mut self, extracted: &[PlayerStats]) -> Self {
        if extracted.len() > PLAYERS_PER_MATCH {
            debug!(
                "Ignoring {} extracted rows beyond the last slot",
                extracted.len() - PLAYERS_PER_MATCH
            );
        }
        for (player, row) in self.players.iter_mut().zip(extracted) {
            player.name = row.name.clone();
            player.kills = row.kills;
            player.assists = row.assists;
        }
        self
    }

    /// Current MVP score of every slot, in slot order.
    pub fn scores(&self) -> Vec<MvpScore> {
        self.players
            .iter()
            .map(|stats| score(stats, self.game_length))
            .collect()
    }
}

fn check_time_spent_dead(slot: usize, value: f64) -> Result<(), MatchError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MatchError::InvalidTimeSpentDead { slot, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn twenty_minutes() -> GameLength {
        GameLength::from_minutes(20.0).unwrap()
    }

    #[test]
    fn new_match_has_five_players_per_team() {
        let state = MatchState::new(twenty_minutes());
        assert_eq!(state.players().len(), 10);
        assert_eq!(state.team_players(Team::Red).count(), 5);
        assert_eq!(state.team_players(Team::Blue).count(), 5);
        assert_eq!(
            state.team_players(Team::Blue).map(|(slot, _)| slot).collect::<Vec<_>>(),
            vec![5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn edit_replaces_only_the_addressed_player() {
        let before = MatchState::new(twenty_minutes());
        let after = before
            .clone()
            .with_player_edit(3, PlayerEdit::Kills(7))
            .unwrap();

        assert_eq!(after.player(3).unwrap().kills, 7);
        for slot in (0..10).filter(|slot| *slot != 3) {
            assert_eq!(after.player(slot), before.player(slot));
        }
        assert_eq!(before.player(3).unwrap().kills, 0);
    }

    #[test]
    fn edits_out_of_range_slots_fail() {
        let state = MatchState::new(twenty_minutes());
        assert_eq!(
            state.with_player_edit(10, PlayerEdit::Kills(1)),
            Err(MatchError::SlotOutOfRange(10))
        );
    }

    #[test]
    fn negative_time_dead_is_rejected() {
        let state = MatchState::new(twenty_minutes());
        assert_eq!(
            state.with_player_edit(0, PlayerEdit::TimeSpentDead(-1.0)),
            Err(MatchError::InvalidTimeSpentDead {
                slot: 0,
                value: -1.0
            })
        );
    }

    #[test]
    fn changing_role_keeps_stale_damage_received_flags() {
        let state = MatchState::new(twenty_minutes())
            .with_player_edit(0, PlayerEdit::Role(Role::Warrior))
            .and_then(|s| {
                s.with_player_edit(
                    0,
                    PlayerEdit::Superlative(Superlative::TopDamageReceivedMatch, true),
                )
            })
            .unwrap();
        assert_eq!(state.scores()[0].to_string(), "1.00");

        let state = state
            .with_player_edit(0, PlayerEdit::Role(Role::Support))
            .unwrap();
        assert!(state.player(0).unwrap().top_damage_received_match);
        assert_eq!(state.scores()[0].to_string(), "0.00");
    }

    #[test]
    fn game_length_change_rescales_death_penalty() {
        let state = MatchState::new(twenty_minutes())
            .with_player_edit(4, PlayerEdit::TimeSpentDead(60.0))
            .unwrap();
        assert_eq!(state.scores()[4].to_string(), "-2.50");

        let state = state.with_game_length(GameLength::from_minutes(10.0).unwrap());
        assert_eq!(state.scores()[4].to_string(), "-5.00");
    }

    #[test]
    fn from_players_requires_ten_records() {
        let result = MatchState::from_players(twenty_minutes(), vec![PlayerStats::default(); 9]);
        assert_eq!(
            result,
            Err(MatchError::WrongPlayerCount {
                expected: 10,
                found: 9
            })
        );
    }

    #[test]
    fn prefill_copies_counts_and_keeps_other_fields() {
        let state = MatchState::new(twenty_minutes())
            .with_player_edit(0, PlayerEdit::Role(Role::Assassin))
            .unwrap();
        let rows: Vec<PlayerStats> = (0..12)
            .map(|i| PlayerStats {
                name: format!("p{}", i),
                kills: i,
                assists: 1,
                ..PlayerStats::default()
            })
            .collect();

        let state = state.prefill(&rows);

        assert_eq!(state.player(0).unwrap().role, Role::Assassin);
        assert_eq!(state.player(9).unwrap().name, "p9");
        assert_eq!(state.player(9).unwrap().kills, 9);
        assert_eq!(state.player(2).unwrap().assists, 1);
    }

    #[test]
    fn prefill_with_fewer_rows_leaves_remaining_slots() {
        let rows = vec![PlayerStats {
            name: "solo".to_owned(),
            kills: 2,
            ..PlayerStats::default()
        }];
        let state = MatchState::new(twenty_minutes()).prefill(&rows);
        assert_eq!(state.player(0).unwrap().name, "solo");
        assert_eq!(state.player(1).unwrap(), &PlayerStats::default());
    }
}
