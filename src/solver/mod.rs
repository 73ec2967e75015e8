//! Hangman solving algorithms
//!
//! This module contains candidate filtering, signature grouping, entropy
//! scoring and the solver that ties them together each turn.

pub mod candidates;
mod engine;
pub mod entropy;
pub mod opening;
pub mod signature;
pub mod strategy;

pub use candidates::{filter_candidates, is_candidate, trial_letters};
pub use engine::{Solver, SolverError};
pub use opening::LetterRanking;
pub use signature::{Signature, build_signature_groups};
pub use strategy::{EntropyStrategy, FrequencyStrategy, Strategy, StrategyType};
