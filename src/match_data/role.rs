use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse player archetype. Only `Warrior` unlocks the damage-received bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "")]
    Unset,
    Warrior,
    Assassin,
    Support,
}

/// Returned when a role name is not one of the exact, case-sensitive role names.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role '{0}', expected Warrior, Assassin, Support or an empty value")]
pub struct ParseRoleError(pub String);

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Unset => "",
            Role::Warrior => "Warrior",
            Role::Assassin => "Assassin",
            Role::Support => "Support",
        }
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Role::Unset),
            "Warrior" => Ok(Role::Warrior),
            "Assassin" => Ok(Role::Assassin),
            "Support" => Ok(Role::Support),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
