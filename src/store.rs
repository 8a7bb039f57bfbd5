use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

use crate::league::{self, PlayerRecord};

/// Errors raised by a player store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Storage for player win counts
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Current win count for `name`, 0 if no win was ever recorded
    async fn get_score(&self, name: &str) -> Result<u64, StoreError>;

    /// Add one win to `name`, creating the player at 1 if absent
    async fn record_win(&self, name: &str) -> Result<(), StoreError>;

    /// Every known player, ranked by wins
    async fn league(&self) -> Result<Vec<PlayerRecord>, StoreError>;
}

/// In-memory player store
pub struct InMemoryPlayerStore {
    scores: RwLock<HashMap<String, u64>>,
}

impl InMemoryPlayerStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            scores: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn get_score(&self, name: &str) -> Result<u64, StoreError> {
        let scores = self.scores.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(scores.get(name).copied().unwrap_or(0))
    }

    async fn record_win(&self, name: &str) -> Result<(), StoreError> {
        let mut scores = self.scores.write().map_err(|_| StoreError::LockPoisoned)?;
        let wins = scores.entry(name.to_string()).or_insert(0);
        *wins = wins.saturating_add(1);
        Ok(())
    }

    async fn league(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        let scores = self.scores.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(league::rank(
            scores.iter().map(|(name, wins)| (name.clone(), *wins)),
        ))
    }
}
