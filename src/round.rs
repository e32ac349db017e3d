//! A single attempt-limited round of guessing one word.

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    hint::{apply_hint, initial_hint},
    Feedback, GameError, Result,
};

/// The number of guesses a round allows.
pub const ATTEMPT_LIMIT: usize = 5;

/// How a round stands after its latest guess.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    /// The round still accepts guesses.
    Pending,

    /// The latest guess was the word.
    Guessed,

    /// Every attempt was used without guessing the word.
    Exhausted,
}

/// One round of guessing a single word.
///
/// A round keeps every [`Feedback`] it produced in order, along with the
/// hint built up from them. It accepts at most [`ATTEMPT_LIMIT`] guesses.
///
/// # Examples
///
/// ```rust
/// use lingo_rs::{Round, feedback::Mark::*};
///
/// let mut round = Round::new("borax");
/// assert_eq!(round.last_hint(), "b....");
///
/// round.guess("conto")?;
/// assert_eq!(round.attempts(), 1);
/// assert_eq!(round.last_hint(), "bo...");
/// assert_eq!(
///     round.last_feedback().unwrap().marks(),
///     [Absent, Correct, Absent, Absent, Absent]
/// );
/// assert!(!round.is_word_guessed());
/// #
/// # Ok::<_, lingo_rs::LingoError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Round {
    word: String,
    feedback_history: Vec<Feedback>,
    attempts: usize,
    last_hint: String,
}

impl Round {
    /// Creates a new round for `word` with only its first letter revealed.
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        Round {
            last_hint: initial_hint(&word),
            word,
            feedback_history: Vec::new(),
            attempts: 0,
        }
    }

    /// Guesses `attempt` and updates the feedback history and hint.
    ///
    /// Returns an error if the round has already used all of its attempts.
    /// A guess of the wrong length still uses an attempt; its feedback is
    /// all [`Mark::Invalid`](crate::Mark::Invalid).
    pub fn guess(&mut self, attempt: &str) -> Result<()> {
        if self.is_word_guess_limit_reached() {
            return Err(GameError::AttemptLimitReached(ATTEMPT_LIMIT).into());
        }

        let feedback = Feedback::compute(attempt, &self.word);
        let hint = apply_hint(&self.last_hint, &feedback)?;

        debug!(
            "attempt {} of {}: {} -> {}",
            self.attempts + 1,
            ATTEMPT_LIMIT,
            feedback,
            hint
        );

        self.attempts += 1;
        self.feedback_history.push(feedback);
        self.last_hint = hint;

        Ok(())
    }

    /// The word to guess.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The length of the word to guess, in characters.
    pub fn word_length(&self) -> usize {
        self.word.chars().count()
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn feedback_history(&self) -> &[Feedback] {
        &self.feedback_history
    }

    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.feedback_history.last()
    }

    pub fn last_hint(&self) -> &str {
        &self.last_hint
    }

    /// Returns true if the most recent guess was the word.
    pub fn is_word_guessed(&self) -> bool {
        matches!(self.last_feedback(), Some(f) if f.is_word_guessed())
    }

    /// Returns true if the round has no attempts left.
    pub fn is_word_guess_limit_reached(&self) -> bool {
        self.attempts >= ATTEMPT_LIMIT
    }

    /// Where the round stands after its latest guess.
    ///
    /// Running out of attempts only counts as [`Outcome::Exhausted`] when the
    /// last of them did not guess the word.
    pub fn outcome(&self) -> Outcome {
        if self.is_word_guess_limit_reached() && !self.is_word_guessed() {
            Outcome::Exhausted
        } else if self.is_word_guessed() {
            Outcome::Guessed
        } else {
            Outcome::Pending
        }
    }
}
