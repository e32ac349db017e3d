//! Keeping games between requests.

use std::collections::BTreeMap;
#[cfg(feature = "serde")]
use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Game, Result, StoreError};

/// Identifies a stored [`Game`].
pub type GameId = u64;

/// A place to load and save whole games by id.
///
/// Stores always hand out owned copies; a game changed after loading must
/// be saved again.
pub trait GameStore {
    /// Stores a new game and returns the id it was given.
    fn create(&mut self, game: Game) -> Result<GameId>;

    /// Loads the game with the given id.
    fn load(&self, id: GameId) -> Result<Game>;

    /// Replaces the game with the given id.
    fn save(&mut self, id: GameId, game: Game) -> Result<()>;

    /// Every stored game, in id order.
    fn all(&self) -> Result<Vec<(GameId, Game)>>;
}

/// A [`GameStore`] that keeps games in memory.
///
/// Ids are handed out sequentially, starting at 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct MemoryStore {
    last_id: GameId,
    games: BTreeMap<GameId, Game>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameStore for MemoryStore {
    fn create(&mut self, game: Game) -> Result<GameId> {
        self.last_id += 1;
        self.games.insert(self.last_id, game);
        Ok(self.last_id)
    }

    fn load(&self, id: GameId) -> Result<Game> {
        self.games
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::GameNotFound(id).into())
    }

    fn save(&mut self, id: GameId, game: Game) -> Result<()> {
        match self.games.get_mut(&id) {
            Some(stored) => {
                *stored = game;
                Ok(())
            }
            None => Err(StoreError::GameNotFound(id).into()),
        }
    }

    fn all(&self) -> Result<Vec<(GameId, Game)>> {
        Ok(self
            .games
            .iter()
            .map(|(&id, game)| (id, game.clone()))
            .collect())
    }
}

/// A [`GameStore`] that mirrors its games to a JSON file.
///
/// The whole file is rewritten after every change.
#[cfg(feature = "serde")]
#[derive(Clone, Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

#[cfg(feature = "serde")]
impl JsonStore {
    /// Opens the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let inner = match std::fs::File::open(&path) {
            Ok(file) => serde_json::from_reader(std::io::BufReader::new(file))
                .map_err(StoreError::from)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => MemoryStore::new(),
            Err(e) => return Err(StoreError::from(e).into()),
        };

        Ok(JsonStore { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `games` next to the store file and then moves it into place,
    /// so the file always holds either the old or the new games.
    fn flush(&self, games: &MemoryStore) -> Result<()> {
        use std::io::Write;

        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        let temp = self.path.with_file_name(name);

        let written = std::fs::File::create(&temp)
            .map_err(StoreError::from)
            .and_then(|file| -> Result<(), StoreError> {
                let mut writer = std::io::BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, games)?;
                writer.flush()?;
                Ok(())
            })
            .and_then(|()| std::fs::rename(&temp, &self.path).map_err(StoreError::from));

        if written.is_err() {
            let _ = std::fs::remove_file(&temp);
        }
        Ok(written?)
    }
}

#[cfg(feature = "serde")]
impl GameStore for JsonStore {
    fn create(&mut self, game: Game) -> Result<GameId> {
        let mut games = self.inner.clone();
        let id = games.create(game)?;
        self.flush(&games)?;
        self.inner = games;
        Ok(id)
    }

    fn load(&self, id: GameId) -> Result<Game> {
        self.inner.load(id)
    }

    fn save(&mut self, id: GameId, game: Game) -> Result<()> {
        let mut games = self.inner.clone();
        games.save(id, game)?;
        self.flush(&games)?;
        self.inner = games;
        Ok(())
    }

    fn all(&self) -> Result<Vec<(GameId, Game)>> {
        self.inner.all()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::LingoError;

    fn is_not_found(result: Result<impl std::fmt::Debug>, expected: GameId) -> bool {
        matches!(
            result,
            Err(LingoError::Store {
                kind: StoreError::GameNotFound(id)
            }) if id == expected
        )
    }

    #[test]
    fn ids_are_sequential() -> Result<()> {
        let mut store = MemoryStore::new();
        assert_eq!(store.create(Game::new())?, 1);
        assert_eq!(store.create(Game::new())?, 2);
        assert_eq!(store.len(), 2);
        Ok(())
    }

    #[test]
    fn saved_games_are_loaded() -> Result<()> {
        let mut store = MemoryStore::new();
        let id = store.create(Game::new())?;

        let mut game = store.load(id)?;
        game.start_new_round("borax")?;
        assert_eq!(store.load(id)?, Game::new());

        store.save(id, game.clone())?;
        assert_eq!(store.load(id)?, game);
        assert_eq!(store.all()?, vec![(id, game)]);
        Ok(())
    }

    #[test]
    fn unknown_ids() {
        let mut store = MemoryStore::new();
        assert!(is_not_found(store.load(7), 7));
        assert!(is_not_found(store.save(7, Game::new()), 7));
        assert!(store.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_store_survives_reopening() -> Result<()> {
        let path = std::env::temp_dir().join(format!("lingo_rs_store_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut game = Game::new();
        game.start_new_round("borax")?;
        game.guess_word("conto")?;

        let id = {
            let mut store = JsonStore::open(&path)?;
            assert!(store.all()?.is_empty());
            store.create(game.clone())?
        };

        let store = JsonStore::open(&path)?;
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.load(id)?, game);

        std::fs::remove_file(&path).map_err(StoreError::from)?;
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn failed_writes_keep_nothing() -> Result<()> {
        let path = std::env::temp_dir().join(format!("lingo_rs_blocked_{}.json", std::process::id()));
        let _ = std::fs::remove_dir_all(&path);

        let mut store = JsonStore::open(&path)?;
        std::fs::create_dir(&path).map_err(StoreError::from)?;

        let mut game = Game::new();
        game.start_new_round("borax")?;
        let result = store.create(game);
        std::fs::remove_dir(&path).map_err(StoreError::from)?;

        assert!(matches!(
            result,
            Err(LingoError::Store {
                kind: StoreError::Io(_)
            })
        ));
        assert!(store.all()?.is_empty());
        assert!(is_not_found(store.save(1, Game::new()), 1));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn failed_saves_keep_the_old_game() -> Result<()> {
        let path = std::env::temp_dir().join(format!("lingo_rs_resave_{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut store = JsonStore::open(&path)?;
        let id = store.create(Game::new())?;
        std::fs::remove_file(&path).map_err(StoreError::from)?;
        std::fs::create_dir(&path).map_err(StoreError::from)?;

        let mut game = Game::new();
        game.start_new_round("borax")?;
        let result = store.save(id, game);
        std::fs::remove_dir(&path).map_err(StoreError::from)?;

        assert!(result.is_err());
        assert_eq!(store.load(id)?, Game::new());
        Ok(())
    }
}
