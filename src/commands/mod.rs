//! Command implementations behind the CLI subcommands

pub mod analyze;
pub mod assist;
pub mod freq;
pub mod play;
pub mod rank;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::run_assist;
pub use freq::{frequency_report, load_weights};
pub use play::run_play;
pub use rank::{RankedGuess, rank_guesses};
