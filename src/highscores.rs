//! Highest score record
//!
//! A single best score persisted through a key/value store.

use serde::{Deserialize, Serialize};

use crate::platform::KeyValueStore;

/// Stored best score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level reached
    #[serde(default)]
    pub level: u32,
}

/// High score store over any key/value backend
#[derive(Debug, Clone)]
pub struct HighScore<S> {
    store: S,
}

impl<S: KeyValueStore> HighScore<S> {
    /// Storage key
    const STORAGE_KEY: &'static str = "egg_snake_highest_score";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored entry, if present and readable
    pub fn entry(&self) -> Option<HighScoreEntry> {
        let raw = self.store.get(Self::STORAGE_KEY)?;
        // Older saves hold a bare integer
        if let Ok(score) = raw.trim().parse::<u64>() {
            return Some(HighScoreEntry { score, level: 0 });
        }
        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Ignoring corrupt high score: {}", e);
                None
            }
        }
    }

    /// Best score so far, 0 on missing or corrupt data
    pub fn best(&self) -> u64 {
        self.entry().map(|e| e.score).unwrap_or(0)
    }

    /// Check if a score would beat the stored best
    fn qualifies(&self, score: u64) -> bool {
        score > 0 && score > self.best()
    }

    /// Store `score` as the record. A zero score is ignored.
    pub fn set(&mut self, score: u64, level: u32) {
        if score == 0 {
            return;
        }

        let entry = HighScoreEntry { score, level };
        match serde_json::to_string(&entry) {
            Ok(json) => {
                self.store.set(Self::STORAGE_KEY, &json);
                log::info!("High score saved: {} (level {})", score, level);
            }
            Err(e) => log::warn!("Failed to encode high score: {}", e),
        }
    }

    /// Store a finished run if it beats the record. Returns true if it did.
    pub fn record(&mut self, score: u64, level: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.set(score, level);
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_defaults_to_zero() {
        let scores = HighScore::new(MemoryStore::new());
        assert_eq!(scores.best(), 0);
        assert_eq!(scores.entry(), None);
    }

    #[test]
    fn test_corrupt_data_reads_as_zero() {
        let mut store = MemoryStore::new();
        store.set("egg_snake_highest_score", "not a score");
        let scores = HighScore::new(store);
        assert_eq!(scores.best(), 0);
    }

    #[test]
    fn test_bare_integer_accepted() {
        let mut store = MemoryStore::new();
        store.set("egg_snake_highest_score", "700");
        assert_eq!(HighScore::new(store).best(), 700);
    }

    #[test]
    fn test_zero_score_not_recorded() {
        let mut scores = HighScore::new(MemoryStore::new());
        assert!(!scores.record(0, 1));
        assert_eq!(scores.store().get("egg_snake_highest_score"), None);
    }

    #[test]
    fn test_set_overwrites_positive_scores() {
        let mut scores = HighScore::new(MemoryStore::new());
        scores.set(400, 2);
        scores.set(100, 1);
        assert_eq!(scores.best(), 100);
        scores.set(0, 1);
        assert_eq!(scores.best(), 100);
    }

    #[test]
    fn test_only_better_scores_replace() {
        let mut scores = HighScore::new(MemoryStore::new());
        assert!(scores.record(300, 2));
        assert_eq!(scores.best(), 300);
        assert!(!scores.record(200, 3));
        assert_eq!(scores.best(), 300);
        assert!(scores.record(500, 4));
        assert_eq!(
            scores.entry(),
            Some(HighScoreEntry {
                score: 500,
                level: 4
            })
        );
    }
}
