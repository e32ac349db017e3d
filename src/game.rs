//! The game state machine: rounds, score and word length progression.

use std::fmt::Display;

use log::{debug, info};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    round::{Outcome, ATTEMPT_LIMIT},
    GameError, Result, Round,
};

/// The length of the word in a game's first round.
pub const MIN_WORD_LENGTH: usize = 5;

/// The longest word length before the progression wraps back around.
pub const MAX_WORD_LENGTH: usize = 7;

/// The coarse state of a [`Game`].
///
/// A game starts out `Waiting`. Starting a round makes it `Playing`, and the
/// round ends either `Won` or `Lost`. Neither of those is final: another
/// round can be started from either.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum GameState {
    Waiting,
    Playing,
    Won,
    Lost,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Waiting
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Waiting => "WAITING",
            GameState::Playing => "PLAYING",
            GameState::Won => "WON",
            GameState::Lost => "LOST",
        };
        write!(f, "{}", name)
    }
}

/// Something a caller asks a [`Game`] to do.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Action {
    StartRound,
    Guess,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::StartRound => write!(f, "start a new round"),
            Action::Guess => write!(f, "guess a word"),
        }
    }
}

/// An event that moves a game from one state to the next.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Event {
    /// A new round was started.
    RoundStarted,

    /// A guess was made in the active round, leaving it in this outcome.
    Guessed(Outcome),
}

impl Event {
    fn action(self) -> Action {
        match self {
            Event::RoundStarted => Action::StartRound,
            Event::Guessed(_) => Action::Guess,
        }
    }
}

impl GameState {
    /// Returns the state that follows `event`, or an error if `event` cannot
    /// happen in this state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lingo_rs::{game::Event, round::Outcome, GameState};
    ///
    /// let state = GameState::Waiting.next(Event::RoundStarted)?;
    /// assert_eq!(state, GameState::Playing);
    /// assert_eq!(state.next(Event::Guessed(Outcome::Guessed))?, GameState::Won);
    /// assert!(state.next(Event::RoundStarted).is_err());
    /// #
    /// # Ok::<_, lingo_rs::LingoError>(())
    /// ```
    pub fn next(self, event: Event) -> Result<GameState> {
        use GameState::*;

        match (self, event) {
            (Waiting | Won | Lost, Event::RoundStarted) => Ok(Playing),
            (Playing, Event::Guessed(Outcome::Pending)) => Ok(Playing),
            (Playing, Event::Guessed(Outcome::Guessed)) => Ok(Won),
            (Playing, Event::Guessed(Outcome::Exhausted)) => Ok(Lost),
            (Playing, Event::RoundStarted) | (Waiting | Won | Lost, Event::Guessed(_)) => {
                Err(GameError::InvalidStateTransition {
                    state: self,
                    action: event.action(),
                }
                .into())
            }
        }
    }
}

/// A Lingo game spanning any number of rounds.
///
/// Only the last round can be played, and only while the game is
/// [`GameState::Playing`]. Every round won adds to the score; the score is
/// never reduced.
///
/// # Examples
///
/// ```rust
/// use lingo_rs::{Game, GameState};
///
/// let mut game = Game::new();
/// assert_eq!(game.next_word_length(), 5);
///
/// game.start_new_round("borax")?;
/// game.guess_word("conto")?;
/// game.guess_word("borax")?;
///
/// assert_eq!(game.state(), GameState::Won);
/// assert_eq!(game.score(), 20);
/// assert_eq!(game.next_word_length(), 6);
/// #
/// # Ok::<_, lingo_rs::LingoError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Game {
    score: u32,
    state: GameState,
    rounds: Vec<Round>,
}

impl Game {
    #[cfg(test)]
    fn with_score(score: u32) -> Self {
        Game {
            score,
            ..Self::default()
        }
    }

    /// Creates a new game without any rounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new round with `word` as the word to guess.
    ///
    /// Returns an error if a round is still being played.
    pub fn start_new_round(&mut self, word: impl Into<String>) -> Result<()> {
        let state = self.state.next(Event::RoundStarted)?;
        let round = Round::new(word);

        debug!(
            "starting round {} with a word of {} letters",
            self.rounds.len() + 1,
            round.word_length()
        );

        self.rounds.push(round);
        self.state = state;
        Ok(())
    }

    /// Guesses `attempt` in the active round and updates state and score.
    ///
    /// Returns an error if no round is being played or the round is out of
    /// attempts.
    pub fn guess_word(&mut self, attempt: &str) -> Result<()> {
        let round = match (self.state, self.rounds.last_mut()) {
            (GameState::Playing, Some(round)) => round,
            (state, _) => {
                return Err(GameError::InvalidStateTransition {
                    state,
                    action: Action::Guess,
                }
                .into())
            }
        };

        round.guess(attempt)?;

        let outcome = round.outcome();
        let state = self.state.next(Event::Guessed(outcome))?;

        match outcome {
            Outcome::Guessed => {
                let points = Self::points_for(round.attempts());
                self.score = self.score.saturating_add(points);
                info!(
                    "guessed \"{}\" in {} attempts for {} points",
                    round.word(),
                    round.attempts(),
                    points
                );
            }
            Outcome::Exhausted => info!("did not guess \"{}\"", round.word()),
            Outcome::Pending => {}
        }

        self.state = state;
        Ok(())
    }

    /// The points for guessing a word on attempt number `attempts`.
    ///
    /// A first guess is worth 25 points and every further attempt 5 less.
    pub fn points_for(attempts: usize) -> u32 {
        (5 * ATTEMPT_LIMIT.saturating_sub(attempts) + 5) as u32
    }

    /// The length of the word to use for the next round.
    ///
    /// The first round uses [`MIN_WORD_LENGTH`], and each later round one
    /// more letter than the previous one, wrapping back around after
    /// [`MAX_WORD_LENGTH`].
    pub fn next_word_length(&self) -> usize {
        match self.current_round() {
            None => MIN_WORD_LENGTH,
            Some(round) => MIN_WORD_LENGTH.max(round.word_length() % MAX_WORD_LENGTH + 1),
        }
    }

    /// The last round, which is the active one while the game is playing.
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::LingoError;
    use proptest::prelude::*;

    fn is_state_error(result: Result<()>, expected: GameState) -> bool {
        matches!(
            result,
            Err(LingoError::Game {
                kind: GameError::InvalidStateTransition { state, .. }
            }) if state == expected
        )
    }

    #[test]
    fn new_game_is_waiting() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::Waiting);
        assert_eq!(game.score(), 0);
        assert!(game.rounds().is_empty());
        assert!(game.current_round().is_none());
        assert!(!game.is_playing());
    }

    #[test]
    fn cannot_start_round_while_playing() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        assert!(game.is_playing());

        assert!(is_state_error(
            game.start_new_round("borax"),
            GameState::Playing
        ));
        assert_eq!(game.rounds().len(), 1);
        Ok(())
    }

    #[test]
    fn cannot_guess_without_round() {
        let mut game = Game::new();
        assert!(is_state_error(game.guess_word("borax"), GameState::Waiting));
    }

    #[test]
    fn cannot_guess_after_winning() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        game.guess_word("borax")?;

        assert!(is_state_error(game.guess_word("borax"), GameState::Won));
        assert_eq!(game.current_round().map(Round::attempts), Some(1));
        Ok(())
    }

    #[test]
    fn first_guess_wins_25_points() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        game.guess_word("borax")?;

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.score(), 25);
        Ok(())
    }

    #[test]
    fn third_guess_wins_15_points() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        game.guess_word("conto")?;
        game.guess_word("conto")?;
        assert_eq!(game.state(), GameState::Playing);
        game.guess_word("borax")?;

        assert_eq!(game.score(), 15);
        Ok(())
    }

    #[test]
    fn five_misses_lose() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        for _ in 0..5 {
            game.guess_word("conto")?;
        }

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.score(), 0);
        assert!(is_state_error(game.guess_word("weebo"), GameState::Lost));
        Ok(())
    }

    #[test]
    fn fifth_guess_wins_5_points() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        for _ in 0..4 {
            game.guess_word("conto")?;
        }
        game.guess_word("borax")?;

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.score(), 5);
        Ok(())
    }

    #[test]
    fn score_accumulates_over_rounds() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        game.guess_word("borax")?;

        game.start_new_round("aaiing")?;
        for _ in 0..5 {
            game.guess_word("bbbbbb")?;
        }
        assert_eq!(game.state(), GameState::Lost);

        game.start_new_round("babyvet")?;
        game.guess_word("bbbbbbb")?;
        game.guess_word("babyvet")?;

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.score(), 45);
        assert_eq!(game.rounds().len(), 3);
        assert_eq!(game.rounds()[0].attempts(), 1);
        Ok(())
    }

    #[test]
    fn wrong_length_guesses_count() -> Result<()> {
        let mut game = Game::new();
        game.start_new_round("borax")?;
        game.guess_word("bo")?;

        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.current_round().map(Round::attempts), Some(1));
        Ok(())
    }

    #[test]
    fn word_length_cycles() -> Result<()> {
        let mut game = Game::new();
        assert_eq!(game.next_word_length(), 5);

        for (word, next) in [("borax", 6), ("aaiing", 7), ("babyvet", 5), ("borax", 6)] {
            game.start_new_round(word)?;
            game.guess_word(word)?;
            assert_eq!(game.next_word_length(), next);
        }
        Ok(())
    }

    #[test]
    fn score_stops_at_the_maximum() -> Result<()> {
        let mut game = Game::with_score(u32::MAX - 10);
        game.start_new_round("borax")?;
        game.guess_word("borax")?;

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.score(), u32::MAX);
        Ok(())
    }

    #[test]
    fn points_table() {
        let points: Vec<u32> = (1..=5).map(Game::points_for).collect();
        assert_eq!(points, [25, 20, 15, 10, 5]);
    }

    #[test]
    fn transitions() {
        use GameState::*;

        for state in [Waiting, Won, Lost] {
            assert_eq!(state.next(Event::RoundStarted).ok(), Some(Playing));
            assert!(state.next(Event::Guessed(Outcome::Guessed)).is_err());
        }
        assert!(Playing.next(Event::RoundStarted).is_err());
        assert_eq!(Playing.next(Event::Guessed(Outcome::Pending)).ok(), Some(Playing));
        assert_eq!(Playing.next(Event::Guessed(Outcome::Guessed)).ok(), Some(Won));
        assert_eq!(Playing.next(Event::Guessed(Outcome::Exhausted)).ok(), Some(Lost));
    }

    proptest! {
        #[test]
        fn score_never_decreases(guesses in prop::collection::vec("[a-e]{5}", 1..20)) {
            let mut game = Game::new();
            let mut last = 0;
            for guess in guesses {
                if !game.is_playing() {
                    game.start_new_round("abcde").unwrap();
                }
                game.guess_word(&guess).unwrap();
                prop_assert!(game.score() >= last);
                prop_assert!(game.current_round().unwrap().attempts() <= ATTEMPT_LIMIT);
                last = game.score();
            }
        }
    }
}
