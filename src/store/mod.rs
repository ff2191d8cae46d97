//! Persistence capability
//!
//! The engine never reaches out to a global store; it is handed a
//! key-value capability at construction. Writes are fire-and-forget: a
//! failing store must never corrupt in-memory game state.

pub mod file;
pub mod session;

pub use file::FileStore;
pub use session::{GameRecord, Session};

use crate::engine::Statistics;
use rustc_hash::FxHashMap;
use tracing::warn;

/// Key under which the current game snapshot is persisted
pub const GAME_STATE_KEY: &str = "gameState";

/// Key under which lifetime statistics are persisted
pub const STATISTICS_KEY: &str = "statistics";

/// A string key-value store
///
/// `set` is fire-and-forget; implementations log failures and carry on.
pub trait KeyValueStore {
    /// Read a value, `None` if absent
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    fn set(&mut self, key: &str, value: &str);
}

/// Read lifetime statistics from a store
///
/// A missing or malformed record reads as zeroes.
#[must_use]
pub fn load_statistics(store: &impl KeyValueStore) -> Statistics {
    let Some(raw) = store.get(STATISTICS_KEY) else {
        return Statistics::default();
    };
    match serde_json::from_str(&raw) {
        Ok(stats) => stats,
        Err(err) => {
            warn!(%err, "discarding malformed statistics");
            Statistics::default()
        }
    }
}

/// In-memory store
///
/// The deterministic fake for tests, and the backing for practice games
/// whose state should not outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(FxHashMap<String, String>);

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}
