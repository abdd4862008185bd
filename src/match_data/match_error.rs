use thiserror::Error;

/// Errors raised when building or editing a match.
///
/// # Variants
///
/// * `InvalidGameLength` - The game length is zero, negative or not a finite number of minutes.
/// * `SlotOutOfRange` - A player slot outside `0..PLAYERS_PER_MATCH` was addressed.
/// * `WrongPlayerCount` - A match record does not hold exactly one entry per slot.
/// * `InvalidTimeSpentDead` - A player's time dead is negative or not finite.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("game length must be a positive number of minutes, got {0}")]
    InvalidGameLength(f64),
    #[error("player slot {0} does not exist")]
    SlotOutOfRange(usize),
    #[error("a match needs exactly {expected} players, got {found}")]
    WrongPlayerCount { expected: usize, found: usize },
    #[error("time spent dead for slot {slot} must be a non-negative number, got {value}")]
    InvalidTimeSpentDead { slot: usize, value: f64 },
}
