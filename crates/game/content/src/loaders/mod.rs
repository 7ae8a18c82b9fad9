//! Content loaders for reading game data from files.
//!
//! Configuration is TOML; catalogs and maps are RON. Every loader returns an
//! [`anyhow::Result`] whose message names the file and the parse failure.

pub mod actors;
pub mod config;
pub mod factory;
pub mod item;
pub mod map;

pub use actors::ActorLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use map::{MapDefinition, MapLoader};

use std::collections::HashSet;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first catalog id that appears twice.
pub(crate) fn ensure_unique_ids<'a>(
    catalog: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate id '{}' in {} catalog", id, catalog);
        }
    }
    Ok(())
}
