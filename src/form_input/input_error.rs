use crate::match_data::role::ParseRoleError;

use thiserror::Error;

/// Errors produced while turning raw form text into typed values.
///
/// Malformed input is always rejected; nothing is silently coerced to zero.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field}: '{raw}' is not a whole non-negative number")]
    NotACount { field: String, raw: String },
    #[error("{field}: '{raw}' is not a number")]
    NotANumber { field: String, raw: String },
    #[error("{field}: '{raw}' must not be negative")]
    Negative { field: String, raw: String },
    #[error("game length: '{0}' must be a positive number of minutes")]
    InvalidGameLength(String),
    #[error("{field}: '{raw}' is not true or false")]
    NotAFlag { field: String, raw: String },
    #[error(transparent)]
    UnknownRole(#[from] ParseRoleError),
    #[error("unknown player field '{0}'")]
    UnknownField(String),
    #[error("'{0}' is not a player slot")]
    BadSlot(String),
    #[error("expected <slot>.<field>=<value>, got '{0}'")]
    MalformedEdit(String),
}
