use crate::PLAYERS_PER_TEAM;

use serde::Serialize;
use std::fmt;

/// Side a player slot belongs to. Fixed by slot position, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// Team of the given slot: the first five slots are red, the next five blue.
    pub fn for_slot(slot: usize) -> Team {
        if slot < PLAYERS_PER_TEAM {
            Team::Red
        } else {
            Team::Blue
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Red => f.write_str("red"),
            Team::Blue => f.write_str("blue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_five_slots_are_red() {
        let teams: Vec<Team> = (0..10).map(Team::for_slot).collect();
        assert_eq!(&teams[..5], &[Team::Red; 5]);
        assert_eq!(&teams[5..], &[Team::Blue; 5]);
    }
}
