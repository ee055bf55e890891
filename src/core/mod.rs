//! Core domain types
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod constraints;
mod feedback;
mod word;

pub use constraints::{Constraints, filter_candidates};
pub use feedback::{Feedback, Label};
pub use word::{WORD_LEN, Word, WordError};
