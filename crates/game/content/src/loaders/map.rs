//! Map data loader.
//!
//! A map file draws its terrain as ASCII rows and lists what spawns where:
//!
//! ```ron
//! (
//!     name: "clearing",
//!     rows: [
//!         "#####",
//!         "#...#",
//!         "#####",
//!     ],
//!     player: (1, 1),
//!     actors: [(3, 1, "rabbit")],
//!     items: [(2, 1, "herb")],
//! )
//! ```
//!
//! Each row character is looked up in the map's `legend`, then in the
//! built-in legend returned by [`default_legend`].

use std::collections::BTreeMap;
use std::path::Path;

use hearthwild_core::{Grid, Position, Tile, TileKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Glyph-to-terrain table used when a map does not override a character.
pub fn default_legend() -> BTreeMap<char, TileKind> {
    BTreeMap::from([
        ('.', TileKind::Floor),
        ('#', TileKind::Wall),
        ('+', TileKind::DoorClosed),
        ('-', TileKind::DoorOpen),
        ('>', TileKind::StairsDown),
        ('<', TileKind::StairsUp),
        (',', TileKind::Grass),
        (';', TileKind::TallGrass),
        ('T', TileKind::Tree),
        ('~', TileKind::WaterShallow),
        ('=', TileKind::WaterDeep),
        ('^', TileKind::Rock),
        (':', TileKind::Sand),
        ('S', TileKind::Snow),
        ('*', TileKind::Campfire),
        ('x', TileKind::Trap),
        ('_', TileKind::Road),
    ])
}

/// Level layout as stored in `maps/{name}.ron`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    pub name: String,
    /// Extra or overriding glyphs for `rows`.
    #[serde(default)]
    pub legend: BTreeMap<char, TileKind>,
    /// Terrain, one string per row, top row first. All rows share a width.
    pub rows: Vec<String>,
    /// Player start as `(x, y)`.
    pub player: (i32, i32),
    /// Creatures as `(x, y, actor_id)`.
    #[serde(default)]
    pub actors: Vec<(i32, i32, String)>,
    /// Ground items as `(x, y, item_id)`.
    #[serde(default)]
    pub items: Vec<(i32, i32, String)>,
    /// Logged when the level starts.
    #[serde(default)]
    pub intro: Option<String>,
}

impl MapDefinition {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn player_start(&self) -> Position {
        Position::new(self.player.0, self.player.1)
    }

    /// Resolves `rows` into a terrain grid with no actors or items.
    ///
    /// Fails when the rows are empty or ragged, or use a glyph neither
    /// legend knows.
    pub fn build_grid(&self) -> LoadResult<Grid> {
        let width = self.width();
        if width == 0 {
            anyhow::bail!("Map '{}' has no rows", self.name);
        }
        let mut legend = default_legend();
        legend.extend(self.legend.iter().map(|(&glyph, &kind)| (glyph, kind)));

        let mut grid = Grid::new(width as i32, self.height() as i32, Tile::default())
            .map_err(|e| anyhow::anyhow!("Map '{}': {}", self.name, e))?;
        for (y, row) in self.rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                anyhow::bail!(
                    "Map '{}' row {} is {} wide, expected {}",
                    self.name,
                    y,
                    row_width,
                    width
                );
            }
            for (x, glyph) in row.chars().enumerate() {
                let Some(&kind) = legend.get(&glyph) else {
                    anyhow::bail!(
                        "Map '{}' uses unknown glyph {:?} at ({}, {})",
                        self.name,
                        glyph,
                        x,
                        y
                    );
                };
                grid.set_tile(Position::new(x as i32, y as i32), Tile::from_kind(kind));
            }
        }
        Ok(grid)
    }
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map definition from a RON file.
    ///
    /// Only the syntax is checked here; [`MapDefinition::build_grid`] validates
    /// the layout.
    pub fn load(path: &Path) -> LoadResult<MapDefinition> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MapDefinition> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))
    }
}
