use crate::match_data::player_stats::PlayerStats;

/// One of the nine "top of the team / top of the match" achievement flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Superlative {
    TopHeroDamageTeam,
    TopHeroDamageMatch,
    TopSiegeDamageTeam,
    TopSiegeDamageMatch,
    TopHealingMatch,
    TopXpContributionTeam,
    TopXpContributionMatch,
    TopDamageReceivedTeam,
    TopDamageReceivedMatch,
}

impl Superlative {
    /// Flags worth one point each regardless of role, in scoring order.
    pub const UNCONDITIONAL: [Superlative; 7] = [
        Superlative::TopHeroDamageTeam,
        Superlative::TopHeroDamageMatch,
        Superlative::TopSiegeDamageTeam,
        Superlative::TopSiegeDamageMatch,
        Superlative::TopHealingMatch,
        Superlative::TopXpContributionTeam,
        Superlative::TopXpContributionMatch,
    ];

    pub const ALL: [Superlative; 9] = [
        Superlative::TopHeroDamageTeam,
        Superlative::TopHeroDamageMatch,
        Superlative::TopSiegeDamageTeam,
        Superlative::TopSiegeDamageMatch,
        Superlative::TopHealingMatch,
        Superlative::TopXpContributionTeam,
        Superlative::TopXpContributionMatch,
        Superlative::TopDamageReceivedTeam,
        Superlative::TopDamageReceivedMatch,
    ];

    /// Name of the flag in match files and form edits.
    pub fn field_name(self) -> &'static str {
        match self {
            Superlative::TopHeroDamageTeam => "topHeroDamageTeam",
            Superlative::TopHeroDamageMatch => "topHeroDamageMatch",
            Superlative::TopSiegeDamageTeam => "topSiegeDamageTeam",
            Superlative::TopSiegeDamageMatch => "topSiegeDamageMatch",
            Superlative::TopHealingMatch => "topHealingMatch",
            Superlative::TopXpContributionTeam => "topXPContributionTeam",
            Superlative::TopXpContributionMatch => "topXPContributionMatch",
            Superlative::TopDamageReceivedTeam => "topDamageReceivedTeam",
            Superlative::TopDamageReceivedMatch => "topDamageReceivedMatch",
        }
    }

    pub fn from_field_name(name: &str) -> Option<Superlative> {
        Superlative::ALL
            .into_iter()
            .find(|flag| flag.field_name() == name)
    }

    pub fn is_set(self, stats: &PlayerStats) -> bool {
        match self {
            Superlative::TopHeroDamageTeam => stats.top_hero_damage_team,
            Superlative::TopHeroDamageMatch => stats.top_hero_damage_match,
            Superlative::TopSiegeDamageTeam => stats.top_siege_damage_team,
            Superlative::TopSiegeDamageMatch => stats.top_siege_damage_match,
            Superlative::TopHealingMatch => stats.top_healing_match,
            Superlative::TopXpContributionTeam => stats.top_xp_contribution_team,
            Superlative::TopXpContributionMatch => stats.top_xp_contribution_match,
            Superlative::TopDamageReceivedTeam => stats.top_damage_received_team,
            Superlative::TopDamageReceivedMatch => stats.top_damage_received_match,
        }
    }

    pub fn set(self, stats: &mut PlayerStats, value: bool) {
        let flag = match self {
            Superlative::TopHeroDamageTeam => &mut stats.top_hero_damage_team,
            Superlative::TopHeroDamageMatch => &mut stats.top_hero_damage_match,
            Superlative::TopSiegeDamageTeam => &mut stats.top_siege_damage_team,
            Superlative::TopSiegeDamageMatch => &mut stats.top_siege_damage_match,
            Superlative::TopHealingMatch => &mut stats.top_healing_match,
            Superlative::TopXpContributionTeam => &mut stats.top_xp_contribution_team,
            Superlative::TopXpContributionMatch => &mut stats.top_xp_contribution_match,
            Superlative::TopDamageReceivedTeam => &mut stats.top_damage_received_team,
            Superlative::TopDamageReceivedMatch => &mut stats.top_damage_received_match,
        };
        *flag = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_resolve_back_to_flags() {
        for flag in Superlative::ALL {
            assert_eq!(Superlative::from_field_name(flag.field_name()), Some(flag));
        }
        assert_eq!(Superlative::from_field_name("topxpcontributionteam"), None);
    }

    #[test]
    fn set_touches_only_its_own_flag() {
        for flag in Superlative::ALL {
            let mut stats = PlayerStats::default();
            flag.set(&mut stats, true);
            for other in Superlative::ALL {
                assert_eq!(other.is_set(&stats), other == flag);
            }
        }
    }
}
