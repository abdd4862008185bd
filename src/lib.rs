pub mod data_processing;
pub mod data_summary;
pub mod file_creation;
pub mod form_input;
pub mod match_data;
pub mod scoring;
pub mod screenshot;

/// Number of players on each team.
pub const PLAYERS_PER_TEAM: usize = 5;

/// Number of player slots in a match. Slots `0..PLAYERS_PER_TEAM` are red, the rest blue.
pub const PLAYERS_PER_MATCH: usize = 2 * PLAYERS_PER_TEAM;
