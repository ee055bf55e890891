//! Terminal output: board rendering and command result printing

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_frequency_tables, print_rank_results};
pub use formatters::{feedback_row, ordinal, skeleton_row, styled_letter};
