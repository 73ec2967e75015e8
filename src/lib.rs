//! Hangman Entropy Solver
//!
//! A Hangman solver that picks each guess by expected information gain over
//! the words still consistent with the game.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_entropy::core::{GameView, Word};
//! use hangman_entropy::dictionary::Dictionary;
//! use hangman_entropy::game::HangmanGame;
//! use hangman_entropy::solver::{EntropyStrategy, Solver};
//!
//! let dictionary = Dictionary::embedded();
//! let solver = Solver::new(EntropyStrategy, &dictionary);
//!
//! let mut game = HangmanGame::new(Word::new("tiger").unwrap(), 5);
//! let guess = solver.next_guess(&game).unwrap();
//! game.apply(&guess).unwrap();
//!
//! println!("{game}");
//! ```

// Core domain types
pub mod core;

// Word dictionary
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Game rules
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
