use crate::data_summary::match_summary::MatchSummary;
use crate::data_summary::player_score_summary::PlayerScoreSummary;
use crate::match_data::match_state::MatchState;
use crate::match_data::team::Team;

/// Scores every player of a match and picks the match and team MVPs.
///
/// Players are ranked by their unrounded score, highest first. Equal scores keep slot
/// order, so the lower slot wins a tie.
///
/// # Arguments
///
/// * `state` - The match to summarize.
///
/// # Returns
///
/// A `MatchSummary` with the full ranking and the three MVPs.
pub fn summarize(state: &MatchState) -> MatchSummary {
    let players: Vec<PlayerScoreSummary> = state
        .players()
        .iter()
        .zip(state.scores())
        .enumerate()
        .map(|(slot, (stats, score))| PlayerScoreSummary {
            slot,
            team: MatchState::team_of(slot),
            name: stats.name.clone(),
            role: stats.role,
            score,
        })
        .collect();

    let red_ranking = rank_players(team_summaries(state, &players, Team::Red));
    let blue_ranking = rank_players(team_summaries(state, &players, Team::Blue));
    let ranking = rank_players(players);

    // A match always has PLAYERS_PER_TEAM players on each side.
    MatchSummary {
        game_length_minutes: state.game_length().minutes(),
        mvp: ranking[0].clone(),
        red_team_mvp: red_ranking[0].clone(),
        blue_team_mvp: blue_ranking[0].clone(),
        ranking,
    }
}

/// Picks the summaries of one team's slots; `players` is indexed by slot.
fn team_summaries(
    state: &MatchState,
    players: &[PlayerScoreSummary],
    team: Team,
) -> Vec<PlayerScoreSummary> {
    state
        .team_players(team)
        .map(|(slot, _)| players[slot].clone())
        .collect()
}

/// Sorts players by score in descending order, keeping slot order for ties.
fn rank_players(mut players: Vec<PlayerScoreSummary>) -> Vec<PlayerScoreSummary> {
    players.sort_by(|p1, p2| {
        p2.score
            .total_cmp(&p1.score)
            .then_with(|| p1.slot.cmp(&p2.slot))
    });
    players
}
