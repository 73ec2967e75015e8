//! Command implementations

pub mod analyze;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, StateSnapshot, analyze_state};
pub use play::{GameRecord, PlayConfig, PlayResult, play, play_game, run_games};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
