//! Entropy-based Hangman scoring
//!
//! Implements Shannon entropy for signature-group distributions and for the
//! all-or-nothing word guess. This is the foundation of the solver.

mod calculator;
mod selector;

pub use calculator::{ENTROPY_TOLERANCE, binary_guess_entropy, group_entropy, log2};
pub use selector::{LetterScore, score_letter, score_letters, select_best_letter};
