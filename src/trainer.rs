//! Playing stored games with words from a provider.

use std::fmt::Display;

use log::{debug, info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    game::MIN_WORD_LENGTH, Feedback, Game, GameId, GameState, GameStore, Result, WordError,
    WordProvider,
};

/// The progress of one game as shown to a player.
///
/// Feedback and hint are those of the current round only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Progress {
    pub id: GameId,
    pub state: GameState,
    pub score: u32,
    pub feedback_history: Vec<Feedback>,
    pub last_hint: Option<String>,
    pub rounds: usize,
}

impl Progress {
    /// Summarizes `game`, stored under `id`.
    pub fn of(id: GameId, game: &Game) -> Self {
        let round = game.current_round();
        Progress {
            id,
            state: game.state(),
            score: game.score(),
            feedback_history: round
                .map(|r| r.feedback_history().to_vec())
                .unwrap_or_default(),
            last_hint: round.map(|r| r.last_hint().to_string()),
            rounds: game.rounds().len(),
        }
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "game {}: {}, score {}, round {}",
            self.id, self.state, self.score, self.rounds
        )?;
        for feedback in &self.feedback_history {
            writeln!(f, "  {}", feedback)?;
        }
        if let Some(hint) = &self.last_hint {
            writeln!(f, "  hint: {}", hint)?;
        }
        Ok(())
    }
}

/// Prints a table with one row per game.
#[cfg(feature = "fancy")]
pub fn print_overview(progress: &[Progress]) {
    use comfy_table::{Cell, Color, Table};

    let mut table = Table::new();
    if table.is_tty() {
        table.load_preset(comfy_table::presets::UTF8_FULL);
    }
    table.set_header(vec!["id", "state", "score", "rounds", "hint"]);

    for p in progress {
        let state = match p.state {
            GameState::Won => Cell::new(p.state).fg(Color::Green),
            GameState::Lost => Cell::new(p.state).fg(Color::Red),
            GameState::Playing | GameState::Waiting => Cell::new(p.state),
        };
        table.add_row(vec![
            Cell::new(p.id),
            state,
            Cell::new(p.score),
            Cell::new(p.rounds),
            Cell::new(p.last_hint.as_deref().unwrap_or("")),
        ]);
    }

    println!("{}", table);
}

/// Runs games kept in a [`GameStore`] with words from a [`WordProvider`].
///
/// Every operation loads the game, applies one change and saves it again.
/// When an operation fails nothing is saved.
///
/// # Examples
///
/// ```rust
/// use lingo_rs::{GameState, MemoryStore, Trainer, WordList};
///
/// let mut trainer = Trainer::new(WordList::new(["borax", "conto", "aaiing"]), MemoryStore::new());
///
/// let progress = trainer.new_game()?;
/// assert_eq!(progress.state, GameState::Playing);
/// assert_eq!(progress.rounds, 1);
///
/// // Unknown words are rejected without using an attempt.
/// assert!(trainer.guess(progress.id, "qzxvk").is_err());
/// assert!(trainer.progress(progress.id)?.feedback_history.is_empty());
/// #
/// # Ok::<_, lingo_rs::LingoError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Trainer<W, S> {
    words: W,
    store: S,
}

impl<W: WordProvider, S: GameStore> Trainer<W, S> {
    pub fn new(words: W, store: S) -> Self {
        Trainer { words, store }
    }

    /// Creates a game and starts its first round.
    pub fn new_game(&mut self) -> Result<Progress> {
        let word = self.words.random_word_of_length(MIN_WORD_LENGTH)?;

        let mut game = Game::new();
        game.start_new_round(word)?;
        let id = self.store.create(game.clone())?;

        info!("created game {}", id);
        Ok(Progress::of(id, &game))
    }

    /// The progress of the game with the given id.
    pub fn progress(&self, id: GameId) -> Result<Progress> {
        let game = self.store.load(id)?;
        Ok(Progress::of(id, &game))
    }

    /// Starts the next round of a game, one letter longer than the last.
    pub fn start_new_round(&mut self, id: GameId) -> Result<Progress> {
        let mut game = self.store.load(id)?;
        let length = game.next_word_length();
        let word = self.words.random_word_of_length(length)?;

        game.start_new_round(word)?;
        self.store.save(id, game.clone())?;

        debug!("game {} started round {}", id, game.rounds().len());
        Ok(Progress::of(id, &game))
    }

    /// Guesses `attempt` in the current round of a game.
    ///
    /// The attempt is trimmed and lower-cased, like the words of a
    /// [`WordList`](crate::WordList), and the same word is both looked up and
    /// guessed. Returns [`WordError::UnknownWord`] without touching the game
    /// if the word provider does not know it.
    pub fn guess(&mut self, id: GameId, attempt: &str) -> Result<Progress> {
        let mut game = self.store.load(id)?;
        let attempt = attempt.trim().to_lowercase();

        if !self.words.exists(&attempt) {
            warn!("game {} rejected unknown word \"{}\"", id, attempt);
            return Err(WordError::UnknownWord(attempt).into());
        }

        game.guess_word(&attempt)?;
        self.store.save(id, game.clone())?;

        Ok(Progress::of(id, &game))
    }

    /// The progress of every stored game.
    pub fn find_all(&self) -> Result<Vec<Progress>> {
        Ok(self
            .store
            .all()?
            .iter()
            .map(|(id, game)| Progress::of(*id, game))
            .collect())
    }

    pub fn words(&self) -> &W {
        &self.words
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
