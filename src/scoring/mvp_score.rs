use crate::scoring::fixed_point::to_fixed_2;

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A player's MVP score. Displays and serializes as a two-decimal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MvpScore(f64);

impl MvpScore {
    /// Wraps an unrounded score as computed by the scorer.
    pub fn new(value: f64) -> Self {
        MvpScore(value)
    }

    /// Returns the unrounded score, before two-decimal formatting.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Orders scores by their unrounded value; NaN sorts above everything.
    pub fn total_cmp(&self, other: &MvpScore) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for MvpScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_fixed_2(self.0))
    }
}

impl Serialize for MvpScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_fixed_point_string() {
        assert_eq!(
            serde_json::to_string(&MvpScore::new(4.5)).unwrap(),
            "\"4.50\""
        );
    }

    #[test]
    fn orders_by_raw_value() {
        let low = MvpScore::new(1.001);
        let high = MvpScore::new(1.004);
        assert_eq!(low.to_string(), high.to_string());
        assert_eq!(low.total_cmp(&high), Ordering::Less);
    }
}
