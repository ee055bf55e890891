//! Game orchestration
//!
//! The turn-by-turn state machine and the accumulated letter bookkeeping that
//! backs the assistance display.

pub mod assist;
pub mod state;

pub use assist::AssistTracker;
pub use state::{AssistanceLevel, Game, GuessError, MAX_TURNS, Phase, TurnReport};
