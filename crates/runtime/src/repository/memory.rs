//! In-memory StateRepository implementation for tests and local runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use hearthwild_core::GameState;

use super::{RepositoryError, Result, StateRepository};

/// In-memory implementation of StateRepository.
#[derive(Default)]
pub struct InMemoryStateRepository {
    states: RwLock<BTreeMap<u64, GameState>>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an initial state at turn 0.
    pub fn with_initial_state(initial_state: GameState) -> Self {
        Self {
            states: RwLock::new(BTreeMap::from([(0, initial_state)])),
        }
    }
}

impl StateRepository for InMemoryStateRepository {
    fn save(&self, turn: u64, state: &GameState) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.insert(turn, state.clone());
        Ok(())
    }

    fn load(&self, turn: u64) -> Result<Option<GameState>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.get(&turn).cloned())
    }

    fn exists(&self, turn: u64) -> bool {
        self.states
            .read()
            .map(|states| states.contains_key(&turn))
            .unwrap_or(false)
    }

    fn delete(&self, turn: u64) -> Result<()> {
        let mut states = self
            .states
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        states.remove(&turn);
        Ok(())
    }

    fn list_turns(&self) -> Result<Vec<u64>> {
        let states = self
            .states
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(states.keys().copied().collect())
    }
}
