use crate::match_data::match_error::MatchError;

const SECONDS_PER_MINUTE: f64 = 60.0;
const DEFAULT_GAME_LENGTH_MINUTES: f64 = 20.0;

/// Total duration of a match, shared by every player in it.
///
/// Always finite and strictly positive, so the death-time term of the score
/// never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct GameLength(f64);

impl GameLength {
    /// Builds a game length from a number of minutes.
    ///
    /// # Returns
    ///
    /// * `Ok(GameLength)` - When `minutes` is finite and greater than zero.
    /// * `Err(MatchError::InvalidGameLength)` - Otherwise.
    pub fn from_minutes(minutes: f64) -> Result<Self, MatchError> {
        if minutes.is_finite() && minutes > 0.0 {
            Ok(GameLength(minutes))
        } else {
            Err(MatchError::InvalidGameLength(minutes))
        }
    }

    pub fn minutes(self) -> f64 {
        self.0
    }

    pub fn seconds(self) -> f64 {
        self.0 * SECONDS_PER_MINUTE
    }
}

impl Default for GameLength {
    fn default() -> Self {
        GameLength(DEFAULT_GAME_LENGTH_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_minutes() {
        let length = GameLength::from_minutes(20.0).unwrap();
        assert_eq!(length.minutes(), 20.0);
        assert_eq!(length.seconds(), 1200.0);
    }

    #[test]
    fn zero_minutes_is_rejected() {
        assert_eq!(
            GameLength::from_minutes(0.0),
            Err(MatchError::InvalidGameLength(0.0))
        );
    }

    #[test]
    fn negative_and_non_finite_minutes_are_rejected() {
        assert!(GameLength::from_minutes(-5.0).is_err());
        assert!(GameLength::from_minutes(f64::NAN).is_err());
        assert!(GameLength::from_minutes(f64::INFINITY).is_err());
    }

    #[test]
    fn defaults_to_twenty_minutes() {
        assert_eq!(GameLength::default().minutes(), 20.0);
    }
}
