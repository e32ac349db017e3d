#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod feedback;
pub use feedback::{Feedback, Mark};

pub mod hint;

pub mod round;
pub use round::Round;

pub mod game;
pub use game::{Game, GameState};

pub mod words;
pub use words::{WordList, WordProvider};

pub mod store;
pub use store::{GameId, GameStore, MemoryStore};

pub mod trainer;
pub use trainer::{Progress, Trainer};

/// The result type used throughout `lingo_rs`.
pub type Result<T, E = LingoError> = std::result::Result<T, E>;

/// The errors that `lingo_rs` can produce.
#[derive(Debug, Error)]
pub enum LingoError {
    #[error("game rules were violated")]
    Game {
        #[from]
        kind: GameError,
    },

    #[error("word lookup failed")]
    Word {
        #[from]
        kind: WordError,
    },

    #[error("the game store encountered an error")]
    Store {
        #[from]
        kind: StoreError,
    },
}

impl LingoError {
    /// Classifies this error the way a request layer should report it.
    ///
    /// Missing games and unknown words are [`Rejection::NotFound`], every
    /// rule violation is [`Rejection::Rejected`], and storage failures are
    /// [`Rejection::Internal`].
    pub fn rejection(&self) -> Rejection {
        match self {
            LingoError::Game { .. } => Rejection::Rejected,
            LingoError::Word {
                kind: WordError::UnknownWord(_),
            } => Rejection::NotFound,
            LingoError::Word {
                kind: WordError::LengthNotSupported(_),
            } => Rejection::Rejected,
            LingoError::Store {
                kind: StoreError::GameNotFound(_),
            } => Rejection::NotFound,
            LingoError::Store { .. } => Rejection::Internal,
        }
    }
}

/// How a caller-facing layer should surface a [`LingoError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The game or word asked for does not exist.
    NotFound,

    /// The request breaks a game rule and should not be retried as is.
    Rejected,

    /// Storage failed; the request itself may have been fine.
    Internal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The requested action is not allowed in the current [`GameState`].
    #[error("cannot {action} while the game is {state}")]
    InvalidStateTransition {
        state: GameState,
        action: game::Action,
    },

    /// The round has already evaluated all of its guesses.
    #[error("the attempt limit of {0} has been reached")]
    AttemptLimitReached(usize),

    /// A hint and a feedback of different lengths were combined.
    #[error("expected feedback for {expected} letters but it has {found}")]
    InvalidFeedbackShape { expected: usize, found: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    /// The word provider has no words of the requested length.
    #[error("words of length {0} are not supported")]
    LengthNotSupported(usize),

    /// The word provider does not know the guessed word.
    #[error("the word \"{0}\" does not exist")]
    UnknownWord(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game with id {0} is not found")]
    GameNotFound(GameId),

    #[error("could not read or write the game file")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble serializing or deserializing games")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejections_follow_error_kind() {
        let not_found: LingoError = StoreError::GameNotFound(3).into();
        assert_eq!(not_found.rejection(), Rejection::NotFound);

        let unknown: LingoError = WordError::UnknownWord("qzxvk".into()).into();
        assert_eq!(unknown.rejection(), Rejection::NotFound);

        let limit: LingoError = GameError::AttemptLimitReached(5).into();
        assert_eq!(limit.rejection(), Rejection::Rejected);

        let length: LingoError = WordError::LengthNotSupported(9).into();
        assert_eq!(length.rejection(), Rejection::Rejected);

        let io: LingoError =
            StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk")).into();
        assert_eq!(io.rejection(), Rejection::Internal);
    }

    #[test]
    fn state_errors_name_the_action() {
        let err = GameError::InvalidStateTransition {
            state: GameState::Playing,
            action: game::Action::StartRound,
        };
        assert_eq!(
            err.to_string(),
            "cannot start a new round while the game is PLAYING"
        );
    }
}
