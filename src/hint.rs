//! Accumulating hints across the guesses of a round.

use crate::{feedback::Mark, Feedback, GameError, Result};

/// The character shown in place of a letter that has not been revealed.
pub const HINT_PLACEHOLDER: char = '.';

/// Creates the hint shown before the first guess: the first letter of
/// `word` followed by one placeholder per remaining letter.
///
/// # Examples
///
/// ```rust
/// use lingo_rs::hint::initial_hint;
///
/// assert_eq!(initial_hint("borax"), "b....");
/// ```
pub fn initial_hint(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(first)
            .chain(chars.map(|_| HINT_PLACEHOLDER))
            .collect(),
        None => String::new(),
    }
}

/// Reveals every letter of `previous` that `feedback` marks as correct.
///
/// All other positions keep what they had, so letters stay revealed once
/// they are. Returns an error if `previous` does not have one letter per
/// mark.
///
/// # Examples
///
/// ```rust
/// use lingo_rs::{hint::apply_hint, Feedback};
///
/// let feedback = Feedback::compute("conto", "borax");
/// assert_eq!(apply_hint("b....", &feedback)?, "bo...");
/// #
/// # Ok::<_, lingo_rs::LingoError>(())
/// ```
pub fn apply_hint(previous: &str, feedback: &Feedback) -> Result<String> {
    let marks = feedback.marks();
    let hint: Vec<char> = previous.chars().collect();

    if hint.len() != marks.len() {
        return Err(GameError::InvalidFeedbackShape {
            expected: hint.len(),
            found: marks.len(),
        }
        .into());
    }

    let attempt: Vec<char> = feedback.attempt().chars().collect();

    hint.iter()
        .zip(marks.iter())
        .enumerate()
        .map(|(i, (&shown, &mark))| -> Result<char> {
            match mark {
                Mark::Correct => attempt.get(i).copied().ok_or_else(|| {
                    GameError::InvalidFeedbackShape {
                        expected: marks.len(),
                        found: attempt.len(),
                    }
                    .into()
                }),
                _ => Ok(shown),
            }
        })
        .collect()
}
