//! High score leaderboard
//!
//! Top-5 scores, always sorted descending. Persistence lives in
//! `crate::persistence`; this type is pure data.

use serde::{Deserialize, Serialize};

/// Maximum number of scores kept
pub const MAX_ENTRIES: usize = 5;

/// Descending, length-capped score list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    scores: Vec<u64>,
}

impl Leaderboard {
    /// Empty leaderboard
    pub fn new() -> Self {
        Self { scores: Vec::new() }
    }

    /// Build from raw scores, restoring the invariants (sorted descending,
    /// at most `MAX_ENTRIES`). Used when loading possibly unsorted data.
    pub fn from_scores(mut scores: Vec<u64>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_ENTRIES);
        Self { scores }
    }

    /// Merge a score into the list. Returns the 1-indexed rank it landed at,
    /// or `None` if it fell off the end of a full board.
    pub fn record(&mut self, score: u64) -> Option<usize> {
        let pos = self
            .scores
            .iter()
            .position(|&s| score > s)
            .unwrap_or(self.scores.len());
        self.scores.insert(pos, score);
        self.scores.truncate(MAX_ENTRIES);
        (pos < MAX_ENTRIES).then_some(pos + 1)
    }

    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    pub fn into_scores(self) -> Vec<u64> {
        self.scores
    }

    pub fn top(&self) -> Option<u64> {
        self.scores.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
