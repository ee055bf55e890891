//! Guess scoring and analysis
//!
//! Expected-elimination scoring over a candidate universe, the persisted
//! score cache, and letter frequency statistics.

pub mod cache;
pub mod frequency;
pub mod scorer;

pub use cache::ScoreCache;
pub use frequency::{ALPHABET_LEN, FrequencyTables, letter_frequencies, ranked_letters};
pub use scorer::{average_score, eliminations};
