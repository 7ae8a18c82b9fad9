//! Content factory for building levels from data files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use hearthwild_core::{GameConfig, GameEngine, GameState, Position, Rgb};

use crate::loaders::{ActorLoader, ConfigLoader, ItemLoader, LoadResult, MapDefinition, MapLoader};
use crate::templates::{ActorTemplate, ItemTemplate};

/// Catalog id of the template the player is spawned from.
pub const PLAYER_TEMPLATE: &str = "player";

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── actors.ron
/// ├── items.ron
/// └── maps/
///     ├── clearing.ron
///     └── ruins.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load actor catalog from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<ActorTemplate>> {
        ActorLoader::load(&self.data_dir.join("actors.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemTemplate>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `map_name` - Name of the map file (without `.ron` extension)
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapDefinition> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Names of the maps under `maps/`, sorted.
    pub fn map_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("maps");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to list maps in {}: {}", dir.display(), e))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Loads the catalogs and the named map, then builds a ready level.
    pub fn load_level(&self, map_name: &str, config: &GameConfig) -> LoadResult<GameState> {
        let map = self.load_map(map_name)?;
        let actors = self.load_actors()?;
        let items = self.load_items()?;
        Self::build_level(&map, &actors, &items, config)
    }

    /// Builds a playable [`GameState`] from a map and the catalogs.
    ///
    /// The player is spawned from the [`PLAYER_TEMPLATE`] entry, then the
    /// map's actors and items in file order, and the player's first field of
    /// view is computed.
    ///
    /// # Errors
    ///
    /// Unknown catalog ids, spawns outside the map, and creatures placed on
    /// unwalkable or already occupied cells.
    pub fn build_level(
        map: &MapDefinition,
        actors: &[ActorTemplate],
        items: &[ItemTemplate],
        config: &GameConfig,
    ) -> LoadResult<GameState> {
        let actor_catalog: HashMap<&str, &ActorTemplate> =
            actors.iter().map(|t| (t.id.as_str(), t)).collect();
        let item_catalog: HashMap<&str, &ItemTemplate> =
            items.iter().map(|t| (t.id.as_str(), t)).collect();

        let mut grid = map.build_grid()?;

        let player_template = actor_catalog.get(PLAYER_TEMPLATE).ok_or_else(|| {
            anyhow::anyhow!("Actor catalog has no '{}' template", PLAYER_TEMPLATE)
        })?;
        let start = map.player_start();
        if !grid.is_walkable(start) {
            anyhow::bail!("Map '{}' starts the player on blocked cell {}", map.name, start);
        }
        let player = grid.add_actor(player_template.spawn(start));

        for (x, y, id) in &map.actors {
            let position = Position::new(*x, *y);
            let template = actor_catalog
                .get(id.as_str())
                .ok_or_else(|| anyhow::anyhow!("Map '{}' spawns unknown actor '{}'", map.name, id))?;
            if !grid.is_walkable(position) {
                anyhow::bail!(
                    "Map '{}' places {} on blocked or occupied cell {}",
                    map.name,
                    id,
                    position
                );
            }
            grid.add_actor(template.spawn(position));
        }

        for (x, y, id) in &map.items {
            let position = Position::new(*x, *y);
            let template = item_catalog
                .get(id.as_str())
                .ok_or_else(|| anyhow::anyhow!("Map '{}' spawns unknown item '{}'", map.name, id))?;
            if !grid.is_passable(position) {
                anyhow::bail!("Map '{}' places {} on blocked cell {}", map.name, id, position);
            }
            grid.add_item(template.spawn(position));
        }

        let mut state = GameState::new(grid, player, config);
        if let Some(intro) = &map.intro {
            state.log.add(intro.clone(), Rgb::YELLOW);
        }
        GameEngine::new(&mut state, config).refresh_visibility();
        tracing::info!(
            "built level '{}': {} actors, {} items",
            map.name,
            map.actors.len() + 1,
            map.items.len()
        );
        Ok(state)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
