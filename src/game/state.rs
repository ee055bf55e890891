//! Game state machine
//!
//! Owns one game's secret, turn counter, guess history, accumulated letter
//! knowledge and (at the highest assistance level) the live candidate set.
//! All evaluation runs inline; the machine never blocks on input.

use super::assist::AssistTracker;
use crate::core::{Constraints, Feedback, Word, WordError, filter_candidates};
use std::fmt;

/// Maximum number of turns per game
pub const MAX_TURNS: usize = 6;

/// Lifecycle phase of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the next guess
    AwaitingGuess,
    /// A guess is being evaluated
    Evaluating,
    /// The secret was found
    Won,
    /// Turn limit reached without finding the secret
    Lost,
}

/// How much derived state is surfaced to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssistanceLevel {
    /// No extra computation
    None,
    /// Required letters and the remaining unused alphabet
    Letters,
    /// Additionally, the live filtered candidate set
    Candidates,
}

impl AssistanceLevel {
    /// Decode the interactive `0`/`1`/`2` selection
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::None),
            1 => Some(Self::Letters),
            2 => Some(Self::Candidates),
            _ => None,
        }
    }
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not a well-formed word (length or characters)
    Malformed(WordError),
    /// Well-formed but not in the accepted dictionary
    NotInDictionary(String),
    /// The game already ended
    Finished,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "{e}"),
            Self::NotInDictionary(word) => write!(f, "'{word}' is not in the word list"),
            Self::Finished => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Malformed(e)
    }
}

/// What one evaluated turn produced
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// The guess as validated
    pub guess: Word,
    /// Per-position classification against the secret
    pub feedback: Feedback,
    /// 1-based number of the turn just played
    pub turn: usize,
    /// Phase after the turn
    pub phase: Phase,
    /// Size of the live candidate set, when it is maintained
    pub candidates_remaining: Option<usize>,
}

/// One game of Wordle
///
/// Created at game start, mutated turn by turn, discarded at game end. The
/// candidate set and guess history are owned exclusively here.
pub struct Game {
    secret: Word,
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    assistance: AssistanceLevel,
    phase: Phase,
    turn: usize,
    history: Vec<(Word, Feedback)>,
    tracker: AssistTracker,
}

impl Game {
    /// Start a new game
    ///
    /// `dictionary` is the accepted guess list; it doubles as the initial
    /// candidate set, so the secret must be a member for filtering to stay
    /// sound.
    #[must_use]
    pub fn new(secret: Word, dictionary: Vec<Word>, assistance: AssistanceLevel) -> Self {
        let candidates = dictionary.clone();
        Self {
            secret,
            dictionary,
            candidates,
            assistance,
            phase: Phase::AwaitingGuess,
            turn: 0,
            history: Vec::new(),
            tracker: AssistTracker::new(),
        }
    }

    /// Play one guess
    ///
    /// Validates the guess, computes feedback against the secret, folds it
    /// into the accumulated constraints and advances the state machine.
    /// Rejected guesses do not consume a turn.
    ///
    /// # Errors
    /// Returns `GuessError` if the game is over, the guess is malformed, or
    /// the guess is not in the accepted dictionary.
    pub fn play(&mut self, guess: &str) -> Result<TurnReport, GuessError> {
        if matches!(self.phase, Phase::Won | Phase::Lost) {
            return Err(GuessError::Finished);
        }

        let guess = Word::new(guess)?;
        if !self.dictionary.contains(&guess) {
            return Err(GuessError::NotInDictionary(guess.text().to_string()));
        }

        self.phase = Phase::Evaluating;
        let feedback = Feedback::calculate(&self.secret, &guess);

        self.tracker.update(&guess, &feedback);
        self.history.push((guess.clone(), feedback));
        self.turn += 1;

        let candidates_remaining = if self.assistance >= AssistanceLevel::Candidates {
            let constraints = Constraints::from_feedback(&guess, &feedback);
            self.candidates = filter_candidates(&self.candidates, &constraints);
            Some(self.candidates.len())
        } else {
            None
        };

        self.phase = if feedback.is_win() {
            Phase::Won
        } else if self.turn == MAX_TURNS {
            Phase::Lost
        } else {
            Phase::AwaitingGuess
        };

        Ok(TurnReport {
            guess,
            feedback,
            turn: self.turn,
            phase: self.phase,
            candidates_remaining,
        })
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of turns played so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// The hidden word; used by the presentation layer on loss
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Configured assistance level
    #[must_use]
    pub const fn assistance(&self) -> AssistanceLevel {
        self.assistance
    }

    /// Guesses played so far with their feedback, in order
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Accumulated letter knowledge
    #[must_use]
    pub const fn tracker(&self) -> &AssistTracker {
        &self.tracker
    }

    /// The live candidate set
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }
}
