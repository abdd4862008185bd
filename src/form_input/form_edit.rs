use crate::form_input::field_parser::{
    parse_count, parse_decimal, parse_flag, parse_game_length, parse_role,
};
use crate::form_input::input_error::InputError;
use crate::match_data::game_length::GameLength;
use crate::match_data::match_error::MatchError;
use crate::match_data::match_state::{MatchState, PlayerEdit};
use crate::match_data::superlative::Superlative;

use std::str::FromStr;

const GAME_LENGTH_FIELD: &str = "gameLength";

/// One form edit, written either as `<slot>.<field>=<value>` for a player field
/// (e.g. `3.kills=7` or `0.topHealingMatch=true`) or as `gameLength=<minutes>` for
/// the length shared by the whole match. Field names are the camelCase names of the
/// match file.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    Player { slot: usize, edit: PlayerEdit },
    GameLength(GameLength),
}

impl FormEdit {
    /// Applies the edit to a match, returning the new state.
    pub fn apply(self, state: MatchState) -> Result<MatchState, MatchError> {
        match self {
            FormEdit::Player { slot, edit } => state.with_player_edit(slot, edit),
            FormEdit::GameLength(game_length) => Ok(state.with_game_length(game_length)),
        }
    }
}

impl FromStr for FormEdit {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, value) = s
            .split_once('=')
            .ok_or_else(|| InputError::MalformedEdit(s.to_owned()))?;

        if target.trim() == GAME_LENGTH_FIELD {
            return Ok(FormEdit::GameLength(parse_game_length(value)?));
        }

        let (slot, field) = target
            .split_once('.')
            .ok_or_else(|| InputError::MalformedEdit(s.to_owned()))?;
        let slot = slot
            .trim()
            .parse()
            .map_err(|_| InputError::BadSlot(slot.to_owned()))?;

        Ok(FormEdit::Player {
            slot,
            edit: player_edit_from_form(field.trim(), value)?,
        })
    }
}

/// Turns the raw text of one form field into a typed `PlayerEdit`.
///
/// # Arguments
///
/// * `field` - camelCase field name, e.g. `kills` or `topDamageReceivedTeam`.
/// * `raw` - The value as typed. Names are kept verbatim.
///
/// # Returns
///
/// * `Ok(PlayerEdit)` - The parsed edit.
/// * `Err(InputError)` - If the field is unknown or the value malformed.
pub fn player_edit_from_form(field: &str, raw: &str) -> Result<PlayerEdit, InputError> {
    match field {
        "name" => Ok(PlayerEdit::Name(raw.to_owned())),
        "kills" => Ok(PlayerEdit::Kills(parse_count(field, raw)?)),
        "assists" => Ok(PlayerEdit::Assists(parse_count(field, raw)?)),
        "timeSpentDead" => Ok(PlayerEdit::TimeSpentDead(parse_decimal(field, raw)?)),
        "role" => Ok(PlayerEdit::Role(parse_role(raw)?)),
        other => {
            let flag = Superlative::from_field_name(other)
                .ok_or_else(|| InputError::UnknownField(other.to_owned()))?;
            Ok(PlayerEdit::Superlative(flag, parse_flag(other, raw)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_data::role::Role;

    #[test]
    fn parses_slot_field_and_value() {
        assert_eq!(
            "3.kills=7".parse(),
            Ok(FormEdit::Player {
                slot: 3,
                edit: PlayerEdit::Kills(7)
            })
        );
        assert_eq!(
            "9.topXPContributionMatch=true".parse(),
            Ok(FormEdit::Player {
                slot: 9,
                edit: PlayerEdit::Superlative(Superlative::TopXpContributionMatch, true)
            })
        );
        assert_eq!(
            "0.name=Jo = the tank".parse(),
            Ok(FormEdit::Player {
                slot: 0,
                edit: PlayerEdit::Name("Jo = the tank".to_owned())
            })
        );
    }

    #[test]
    fn parses_game_length() {
        assert_eq!(
            "gameLength=25".parse(),
            Ok(FormEdit::GameLength(GameLength::from_minutes(25.0).unwrap()))
        );
        assert_eq!(
            "gameLength=12,5".parse(),
            Ok(FormEdit::GameLength(GameLength::from_minutes(12.5).unwrap()))
        );
        assert_eq!(
            "gameLength=0".parse::<FormEdit>(),
            Err(InputError::InvalidGameLength("0".to_owned()))
        );
    }

    #[test]
    fn rejects_malformed_edits() {
        assert_eq!(
            "kills=3".parse::<FormEdit>(),
            Err(InputError::MalformedEdit("kills=3".to_owned()))
        );
        assert_eq!(
            "3.kills".parse::<FormEdit>(),
            Err(InputError::MalformedEdit("3.kills".to_owned()))
        );
        assert_eq!(
            "x.kills=3".parse::<FormEdit>(),
            Err(InputError::BadSlot("x".to_owned()))
        );
        assert_eq!(
            "1.deaths=3".parse::<FormEdit>(),
            Err(InputError::UnknownField("deaths".to_owned()))
        );
        assert!(matches!(
            "1.kills=many".parse::<FormEdit>(),
            Err(InputError::NotACount { .. })
        ));
    }

    #[test]
    fn applied_edits_change_the_score() {
        let state = MatchState::new(GameLength::default());
        let state = ["2.role=Warrior", "2.topDamageReceivedTeam=true", "2.assists=4"]
            .iter()
            .map(|raw| raw.parse::<FormEdit>().unwrap())
            .try_fold(state, |state, edit| edit.apply(state))
            .unwrap();

        assert_eq!(state.player(2).unwrap().role, Role::Warrior);
        assert_eq!(state.scores()[2].to_string(), "4.50");
    }

    #[test]
    fn game_length_edit_rescales_death_penalty() {
        let state = MatchState::new(GameLength::default())
            .with_player_edit(1, PlayerEdit::TimeSpentDead(60.0))
            .unwrap();
        assert_eq!(state.scores()[1].to_string(), "-2.50");

        let edit: FormEdit = "gameLength=10".parse().unwrap();
        let state = edit.apply(state).unwrap();

        assert_eq!(state.game_length().minutes(), 10.0);
        assert_eq!(state.scores()[1].to_string(), "-5.00");
    }

    #[test]
    fn applying_to_a_missing_slot_fails() {
        let edit: FormEdit = "12.kills=1".parse().unwrap();
        assert_eq!(
            edit.apply(MatchState::new(GameLength::default())),
            Err(MatchError::SlotOutOfRange(12))
        );
    }
}
