//! Leaderboard storage
//!
//! The simulation never blocks on storage: loads recover from missing or
//! corrupt data by returning an empty board, and save failures are reported
//! to the caller to log and drop.

use std::io;
use std::path::PathBuf;
use std::{env, fs};

use crate::highscores::Leaderboard;

/// Storage contract consumed by the game controller
pub trait ScoreStore {
    /// Load the persisted leaderboard; absent or corrupt data yields an
    /// empty board and is never surfaced as an error.
    fn load(&self) -> Leaderboard;

    /// Persist the leaderboard.
    fn save(&mut self, board: &Leaderboard) -> io::Result<()>;
}

/// JSON file storage
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `$HOME/.dot_dodge_scores.json`, falling back to the
    /// working directory when `HOME` is unset.
    pub fn default_path() -> PathBuf {
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".dot_dodge_scores.json")
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Leaderboard {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no leaderboard file, starting fresh");
                return Leaderboard::new();
            }
            Err(err) => {
                log::warn!("leaderboard file unreadable, starting fresh: {err}");
                return Leaderboard::new();
            }
        };
        match serde_json::from_str::<Leaderboard>(&json) {
            // Re-sanitize in case the file was edited out of order
            Ok(board) => {
                let board = Leaderboard::from_scores(board.into_scores());
                log::info!("loaded {} high scores", board.scores().len());
                board
            }
            Err(err) => {
                log::warn!("corrupt leaderboard file, starting fresh: {err}");
                Leaderboard::new()
            }
        }
    }

    fn save(&mut self, board: &Leaderboard) -> io::Result<()> {
        let json = serde_json::to_string(board)?;
        fs::write(&self.path, json)
    }
}

/// In-memory storage for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<Leaderboard>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last board handed to `save`, if any
    pub fn saved(&self) -> Option<&Leaderboard> {
        self.saved.as_ref()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Leaderboard {
        self.saved.clone().unwrap_or_default()
    }

    fn save(&mut self, board: &Leaderboard) -> io::Result<()> {
        self.saved = Some(board.clone());
        Ok(())
    }
}
