use hearthwild_core::GameState;

use super::Result;

/// Storage for game state snapshots, keyed by the turn they were taken on.
///
/// Saving the same turn twice replaces the earlier snapshot.
pub trait StateRepository: Send + Sync {
    /// Save a game state indexed by turn
    fn save(&self, turn: u64, state: &GameState) -> Result<()>;

    /// Load a game state by turn
    fn load(&self, turn: u64) -> Result<Option<GameState>>;

    /// Check if a state exists
    fn exists(&self, turn: u64) -> bool;

    /// Delete a state. Deleting a missing turn is not an error.
    fn delete(&self, turn: u64) -> Result<()>;

    /// List all stored turns in ascending order
    fn list_turns(&self) -> Result<Vec<u64>>;

    /// Most recent snapshot, if any.
    fn latest(&self) -> Result<Option<(u64, GameState)>> {
        let Some(&turn) = self.list_turns()?.last() else {
            return Ok(None);
        };
        Ok(self.load(turn)?.map(|state| (turn, state)))
    }
}
