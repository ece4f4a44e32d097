//! Hurdle
//!
//! A Wordle-style word game where puzzles chain into hurdles: each hurdle after
//! the first opens with the previous answer already guessed, and later hurdles
//! are worth more.
//!
//! # Quick Start
//!
//! ```rust
//! use hurdle::core::{Feedback, LetterStatus, Word};
//! use hurdle::hurdle::calculate_hurdle_score;
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let feedback = Feedback::generate(&guess, &answer);
//! assert_eq!(feedback.count(LetterStatus::Correct), 2);
//!
//! // Hurdle 2 cleared in 3 guesses
//! assert_eq!(calculate_hurdle_score(2, 3), 250);
//! ```

// Core domain types
pub mod core;

// Errors and tunables
pub mod config;
pub mod error;

// Word sources
pub mod dictionary;
pub mod wordlists;

// Single games and hurdle chains
pub mod game;
pub mod hurdle;

// Automated player for simulations
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
