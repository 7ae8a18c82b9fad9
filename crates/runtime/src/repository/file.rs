//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use hearthwild_core::GameState;

use super::{RepositoryError, Result, StateRepository, validate};

/// File-based implementation of StateRepository.
///
/// States are stored as `state_{turn}.bin` in bincode. Writes go to a
/// `.bin.tmp` sibling first and are renamed into place, so a crash never
/// leaves a half-written snapshot under the final name.
pub struct FileStateRepository {
    base_dir: PathBuf,
}

impl FileStateRepository {
    /// Create a new file-based state repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to a state file.
    pub fn state_path(&self, turn: u64) -> PathBuf {
        self.base_dir.join(format!("state_{}.bin", turn))
    }

    /// Decodes a state file written by any `FileStateRepository`.
    ///
    /// Bytes that decode but describe an inconsistent grid (layer sizes that
    /// disagree with the dimensions, actors or items off the map) are
    /// reported as [`RepositoryError::CorruptedData`].
    pub fn read_path(path: &Path) -> Result<GameState> {
        let bytes = fs::read(path)?;
        bincode::deserialize(&bytes).map_err(|e| match *e {
            // Raised by the grid's own consistency checks while decoding.
            bincode::ErrorKind::Custom(message) => RepositoryError::CorruptedData(format!(
                "{}: {}",
                path.display(),
                message
            )),
            other => RepositoryError::Serialization(other.to_string()),
        })
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, turn: u64, state: &GameState) -> Result<()> {
        let path = self.state_path(turn);
        let temp_path = path.with_extension("bin.tmp");

        // Serialize to bincode
        let bytes =
            bincode::serialize(state).map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        // Write to temp file
        fs::write(&temp_path, bytes)?;

        // Atomic rename
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved state[{}] to {}", turn, path.display());
        Ok(())
    }

    fn load(&self, turn: u64) -> Result<Option<GameState>> {
        let path = self.state_path(turn);
        if !path.exists() {
            return Ok(None);
        }

        // Decode, then check the references the decoder cannot see
        let state = Self::read_path(&path)?;
        validate(turn, &state)?;
        tracing::debug!("Loaded state[{}] from {}", turn, path.display());
        Ok(Some(state))
    }

    fn exists(&self, turn: u64) -> bool {
        self.state_path(turn).exists()
    }

    fn delete(&self, turn: u64) -> Result<()> {
        let path = self.state_path(turn);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted state[{}]", turn);
        }
        Ok(())
    }

    fn list_turns(&self) -> Result<Vec<u64>> {
        let mut turns = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(turn) = filename
                    .strip_prefix("state_")
                    .and_then(|s| s.strip_suffix(".bin"))
                    .and_then(|s| s.parse::<u64>().ok())
            {
                turns.push(turn);
            }
        }
        turns.sort_unstable();
        Ok(turns)
    }
}
