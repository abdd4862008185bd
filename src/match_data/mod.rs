pub mod game_length;
pub mod match_error;
pub mod match_record;
pub mod match_state;
pub mod player_stats;
pub mod role;
pub mod superlative;
pub mod team;
