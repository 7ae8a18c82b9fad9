//! Item catalog loader.

use std::path::Path;

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};
use crate::templates::ItemTemplate;

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// RON format: `[ItemTemplate, ...]`. Ids must be unique.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemTemplate>> {
        let items: Vec<ItemTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        ensure_unique_ids("item", items.iter().map(|item| item.id.as_str()))?;
        tracing::debug!("loaded {} item templates", items.len());
        Ok(items)
    }
}
