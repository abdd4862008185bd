pub mod fixed_point;
pub mod mvp_score;
pub mod mvp_scorer;
