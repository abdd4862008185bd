pub mod batch_summary;
pub mod match_summarizer;
pub mod match_summary;
pub mod player_score_summary;
