use crate::match_data::role::Role;

use serde::{Deserialize, Serialize};

/// Statistics recorded for one player in one match.
///
/// Field names serialize in camelCase so match files keep the same shape as the
/// form that produced them. Missing fields take their default value.
///
/// # Fields
///
/// * `name` - Display name, not required to be unique.
/// * `kills`, `assists` - Counts for the match.
/// * `time_spent_dead` - Time dead as entered in the form (labelled minutes). The
///   scorer divides it directly by the game length in seconds.
/// * `role` - The player's archetype, `Role::Unset` until chosen.
/// * `top_*` - Superlative flags. The two damage-received flags only count for warriors,
///   but are kept as-is when the role changes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub name: String,
    pub kills: u32,
    pub assists: u32,
    pub time_spent_dead: f64,
    pub role: Role,
    pub top_hero_damage_team: bool,
    pub top_hero_damage_match: bool,
    pub top_siege_damage_team: bool,
    pub top_siege_damage_match: bool,
    pub top_healing_match: bool,
    #[serde(rename = "topXPContributionTeam")]
    pub top_xp_contribution_team: bool,
    #[serde(rename = "topXPContributionMatch")]
    pub top_xp_contribution_match: bool,
    pub top_damage_received_team: bool,
    pub top_damage_received_match: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let stats: PlayerStats = serde_json::from_str(r#"{"name":"Li","kills":4}"#).unwrap();
        assert_eq!(stats.name, "Li");
        assert_eq!(stats.kills, 4);
        assert_eq!(stats.assists, 0);
        assert_eq!(stats.role, Role::Unset);
        assert!(!stats.top_healing_match);
    }

    #[test]
    fn uses_the_form_field_names() {
        let stats = PlayerStats {
            top_xp_contribution_team: true,
            time_spent_dead: 1.5,
            ..PlayerStats::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["topXPContributionTeam"], true);
        assert_eq!(json["timeSpentDead"], 1.5);
        assert_eq!(json["role"], "");
    }
}
