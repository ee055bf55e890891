//! Feedback calculation and representation
//!
//! Feedback classifies each guess position as Correct (green), Present
//! (yellow) or Absent (gray). Duplicate letters follow the standard rules:
//! exact matches claim their letter first, then remaining occurrences are
//! credited left to right, and the count of Correct+Present labels for a
//! letter never exceeds that letter's count in the secret.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Classification of a single guess letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Letter matches the secret at this exact position (green)
    Correct,
    /// Letter occurs in the secret at a different position (yellow)
    Present,
    /// Letter does not occur, or all occurrences are already credited (gray)
    Absent,
}

impl Label {
    /// The single-letter result code used at the interactive boundary
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'e',
            Self::Present => 'c',
            Self::Absent => 'a',
        }
    }

    /// Decode a result code letter (`e` = exact, `c` = contains, `a` = absent)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'e' => Some(Self::Correct),
            'c' => Some(Self::Present),
            'a' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Ordered per-position feedback for one (secret, guess) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    labels: [Label; WORD_LEN],
}

impl Feedback {
    /// All positions Correct (the winning feedback)
    pub const WIN: Self = Self {
        labels: [Label::Correct; WORD_LEN],
    };

    /// Build feedback directly from labels
    #[must_use]
    pub const fn new(labels: [Label; WORD_LEN]) -> Self {
        Self { labels }
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// Two passes, duplicate-safe:
    /// 1. Exact matches first: label Correct and decrement that letter's
    ///    remaining count from the secret.
    /// 2. Remaining positions: label Present while the letter still has
    ///    remaining count, otherwise Absent.
    ///
    /// A single-pass comparison misclassifies duplicates (a letter appearing
    /// once in the secret but twice in the guess must be Present at most
    /// once), so exact matches must be resolved before misplaced ones.
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::{Feedback, Label, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("canoe").unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess);
    ///
    /// use Label::{Absent, Correct, Present};
    /// assert_eq!(
    ///     feedback.labels(),
    ///     &[Correct, Present, Present, Absent, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let mut labels = [Label::Absent; WORD_LEN];
        let mut remaining = secret.letter_counts();

        // First pass: exact position matches
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == secret.letter_at(i) {
                labels[i] = Label::Correct;
                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from the remaining pool
        for i in 0..WORD_LEN {
            if labels[i] == Label::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                labels[i] = Label::Present;
                *count -= 1;
            }
        }

        Self { labels }
    }

    /// The ordered per-position labels
    #[inline]
    #[must_use]
    pub const fn labels(&self) -> &[Label; WORD_LEN] {
        &self.labels
    }

    /// The label at a specific position
    #[inline]
    #[must_use]
    pub const fn label_at(&self, position: usize) -> Label {
        self.labels[position]
    }

    /// Whether every position is Correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.labels.iter().all(|&l| l == Label::Correct)
    }

    /// Number of Correct labels
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l == Label::Correct).count()
    }

    /// Decode a result code string like `caace`
    ///
    /// Each character must be one of `e` (exact), `c` (contains) or `a`
    /// (absent); the string must be exactly [`WORD_LEN`] characters. This is
    /// the one place the string-coded external form is decoded.
    #[must_use]
    pub fn from_codes(codes: &str) -> Option<Self> {
        let mut labels = [Label::Absent; WORD_LEN];
        let mut count = 0;

        for (i, code) in codes.chars().enumerate() {
            if i >= WORD_LEN {
                return None;
            }
            labels[i] = Label::from_code(code)?;
            count += 1;
        }

        (count == WORD_LEN).then_some(Self { labels })
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.labels {
            write!(f, "{}", label.code())?;
        }
        Ok(())
    }
}
