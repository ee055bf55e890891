//! Wordle Coach
//!
//! A five-letter word game with a built-in coach: play with configurable
//! assistance, run the interactive assistant against a real game, or score
//! guesses offline by how many candidates they eliminate on average.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_coach::core::{Feedback, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("slate").unwrap();
//!
//! let feedback = Feedback::calculate(&secret, &guess);
//! println!("Result codes: {feedback}");
//! ```

// Core domain types
pub mod core;

// Guess scoring and letter statistics
pub mod solver;

// Game state machine and letter tracking
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Line-oriented input sources
pub mod input;
