//! Score history kept across a training run.

pub mod score_log;

pub use score_log::ScoreLog;
