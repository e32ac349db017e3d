//! Looking up words to guess.
//!
//! The game itself only ever works on strings handed to it. A
//! [`WordProvider`] is what the [`Trainer`](crate::Trainer) asks for the next
//! word to guess and for whether a guess is a real word.

use std::{
    collections::BTreeMap,
    io::{self, BufRead},
};

use rand::seq::SliceRandom;

use crate::{Result, WordError};

/// A source of words, indexed by length.
pub trait WordProvider {
    /// Picks a random word with `length` letters.
    ///
    /// Returns [`WordError::LengthNotSupported`] if there is no such word.
    fn random_word_of_length(&self, length: usize) -> Result<String>;

    /// Returns true if `word` is a known word.
    fn exists(&self, word: &str) -> bool;
}

/// An in-memory [`WordProvider`].
///
/// Words are normalized to lowercase and stored by their length in
/// characters. Anything that is not purely alphabetic is skipped.
///
/// # Examples
///
/// ```rust
/// use lingo_rs::{WordList, WordProvider};
///
/// let words = WordList::new(["borax", "Conto", "aaiing", "it's"]);
/// assert_eq!(words.len(), 3);
/// assert!(words.exists("conto"));
/// assert!(!words.exists("bompa"));
/// assert_eq!(words.random_word_of_length(6)?, "aaiing");
/// assert!(words.random_word_of_length(7).is_err());
/// #
/// # Ok::<_, lingo_rs::LingoError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    by_length: BTreeMap<usize, Vec<String>>,
}

impl WordList {
    /// Creates a word list from any collection of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_length: BTreeMap<usize, Vec<String>> = BTreeMap::new();

        for word in words.into_iter().filter_map(|w| normalize(w.as_ref())) {
            by_length
                .entry(word.chars().count())
                .or_default()
                .push(word);
        }

        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
        }

        WordList { by_length }
    }

    /// Reads a word list with one word per line.
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
        Ok(Self::new(
            lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.starts_with('#')),
        ))
    }

    /// The number of distinct words in the list.
    pub fn len(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.values().all(Vec::is_empty)
    }

    /// The word lengths that have at least one word.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().copied()
    }
}

impl WordProvider for WordList {
    fn random_word_of_length(&self, length: usize) -> Result<String> {
        self.by_length
            .get(&length)
            .and_then(|bucket| bucket.choose(&mut rand::thread_rng()))
            .cloned()
            .ok_or_else(|| WordError::LengthNotSupported(length).into())
    }

    fn exists(&self, word: &str) -> bool {
        match normalize(word) {
            Some(word) => self
                .by_length
                .get(&word.chars().count())
                .map_or(false, |bucket| bucket.binary_search(&word).is_ok()),
            None => false,
        }
    }
}

fn normalize(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}
