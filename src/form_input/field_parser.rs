use crate::form_input::input_error::InputError;
use crate::match_data::game_length::GameLength;
use crate::match_data::role::Role;

/// Parses a kills or assists field.
///
/// A blank field is an empty number box and counts as zero. Anything else must be a
/// whole non-negative number.
///
/// # Arguments
///
/// * `field` - Field name used in the error message.
/// * `raw` - The text as typed.
pub fn parse_count(field: &str, raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| InputError::NotACount {
        field: field.to_owned(),
        raw: raw.to_owned(),
    })
}

/// Parses a non-negative decimal, accepting a decimal comma. Blank means zero.
pub fn parse_decimal(field: &str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed
        .replacen(',', ".", 1)
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| InputError::NotANumber {
            field: field.to_owned(),
            raw: raw.to_owned(),
        })?;

    if value < 0.0 {
        return Err(InputError::Negative {
            field: field.to_owned(),
            raw: raw.to_owned(),
        });
    }
    Ok(value)
}

/// Parses the game length field. Unlike other numbers it has no blank default and
/// must be strictly positive.
pub fn parse_game_length(raw: &str) -> Result<GameLength, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::InvalidGameLength(raw.to_owned()));
    }
    let minutes = parse_decimal("game length", raw)?;
    GameLength::from_minutes(minutes).map_err(|_| InputError::InvalidGameLength(raw.to_owned()))
}

pub fn parse_role(raw: &str) -> Result<Role, InputError> {
    Ok(raw.parse::<Role>()?)
}

pub fn parse_flag(field: &str, raw: &str) -> Result<bool, InputError> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(InputError::NotAFlag {
            field: field.to_owned(),
            raw: raw.to_owned(),
        }),
    }
}
