//! Grading guesses against the word to guess.

use std::fmt::Display;

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A Lingo "mark" that indicates the correctness of a letter in a guess.
///
/// `Correct` means that the letter is in the correct position. `Present`
/// means that the letter is in the word, but somewhere else. `Absent` means
/// that the letter does not contribute a match. `Invalid` is only ever used
/// for a whole guess whose length does not match the word.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Mark {
    /// The letter guessed is in the correct position.
    Correct,

    /// The letter guessed is in the word, but not there.
    Present,

    /// The letter guessed is not in the word.
    Absent,

    /// The guess as a whole did not have the length of the word.
    Invalid,
}

impl Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Mark::Correct => '+',
            Mark::Present => '?',
            Mark::Absent => '-',
            Mark::Invalid => '!',
        };
        write!(f, "{}", symbol)
    }
}

/// The marks given to a single attempt.
///
/// A [`Feedback`] is only ever produced by [`Feedback::compute()`] (or read
/// back from storage), so the number of marks always equals the length of
/// the word it was computed against.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Feedback {
    attempt: String,
    marks: Vec<Mark>,
}

impl Feedback {
    /// Grades `attempt` against `target`.
    ///
    /// When the lengths differ, every letter of `target` gets
    /// [`Mark::Invalid`]. Otherwise letters in the right place are
    /// [`Mark::Correct`], and for every other letter of the attempt the
    /// *first* position in `target` holding that letter becomes
    /// [`Mark::Present`] if it was still [`Mark::Absent`]. Note that the
    /// present mark is placed at the position found in `target`, and that
    /// duplicate letters are not counted against each other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lingo_rs::feedback::{Feedback, Mark::*};
    ///
    /// let feedback = Feedback::compute("bompa", "borax");
    /// assert_eq!(feedback.marks(), [Correct, Correct, Absent, Present, Absent]);
    ///
    /// let feedback = Feedback::compute("bor", "borax");
    /// assert!(feedback.is_guess_invalid());
    /// assert_eq!(feedback.marks().len(), 5);
    /// ```
    pub fn compute(attempt: &str, target: &str) -> Self {
        let guess: Vec<char> = attempt.chars().collect();
        let answer: Vec<char> = target.chars().collect();

        if guess.len() != answer.len() {
            return Feedback {
                attempt: attempt.to_string(),
                marks: vec![Mark::Invalid; answer.len()],
            };
        }

        let mut marks: Vec<Mark> = guess
            .iter()
            .zip(answer.iter())
            .map(|(g, a)| if g == a { Mark::Correct } else { Mark::Absent })
            .collect();

        for (i, letter) in guess.iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }

            if let Some(j) = answer.iter().position(|c| c == letter) {
                if marks[j] == Mark::Absent {
                    marks[j] = Mark::Present;
                }
            }
        }

        Feedback {
            attempt: attempt.to_string(),
            marks,
        }
    }

    /// The attempt these marks were given to.
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns true if every mark is [`Mark::Correct`].
    pub fn is_word_guessed(&self) -> bool {
        self.marks.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Returns true if any mark is [`Mark::Invalid`].
    pub fn is_guess_invalid(&self) -> bool {
        self.marks.iter().any(|&mark| mark == Mark::Invalid)
    }

    /// Renders the attempt with every letter coloured by its mark.
    ///
    /// Colours are only used when stdout supports them; otherwise this is
    /// the same as the [`Display`] output.
    #[cfg(feature = "fancy")]
    pub fn paint(&self) -> String {
        use owo_colors::{AnsiColors, OwoColorize, Stream};

        if self.is_guess_invalid() {
            return self
                .attempt
                .if_supports_color(Stream::Stdout, |text| text.color(AnsiColors::Red))
                .to_string();
        }

        self.attempt
            .chars()
            .zip(self.marks.iter())
            .map(|(letter, mark)| {
                let color = match mark {
                    Mark::Correct => AnsiColors::Green,
                    Mark::Present => AnsiColors::Yellow,
                    Mark::Absent => AnsiColors::BrightBlack,
                    Mark::Invalid => AnsiColors::Red,
                };
                letter
                    .if_supports_color(Stream::Stdout, |text| text.color(color))
                    .to_string()
            })
            .collect()
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.attempt, self.marks.iter().join(""))
    }
}
