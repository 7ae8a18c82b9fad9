//! Actor catalog loader.
//!
//! Loads players and creatures from a RON list of [`ActorTemplate`]s.

use std::path::Path;

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};
use crate::templates::ActorTemplate;

/// Loader for actor catalog from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor catalog from a RON file.
    ///
    /// RON format: `[ActorTemplate, ...]`. Ids must be unique.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    pub fn load(path: &Path) -> LoadResult<Vec<ActorTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ActorTemplate>> {
        let actors: Vec<ActorTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;
        ensure_unique_ids("actor", actors.iter().map(|actor| actor.id.as_str()))?;

        for actor in &actors {
            if actor.hp == 0 {
                anyhow::bail!("Actor '{}' must start with positive hp", actor.id);
            }
        }
        tracing::debug!("loaded {} actor templates", actors.len());
        Ok(actors)
    }
}
