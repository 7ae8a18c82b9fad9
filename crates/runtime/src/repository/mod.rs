//! Repository layer for dynamic runtime data.
//!
//! Repositories hold data that changes during play, currently whole
//! [`GameState`](hearthwild_core::GameState) snapshots for save and load.
//! Static content (templates, maps) comes from `hearthwild-content` instead.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileStateRepository;
pub use memory::InMemoryStateRepository;
pub use traits::StateRepository;

use hearthwild_core::GameState;

/// Rejects decoded states whose player id points nowhere.
pub(crate) fn validate(turn: u64, state: &GameState) -> Result<()> {
    if state.player().is_none() {
        return Err(RepositoryError::CorruptedData(format!(
            "state[{}] has no actor for player {}",
            turn, state.player
        )));
    }
    Ok(())
}
