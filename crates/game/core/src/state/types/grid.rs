//! Spatial model of one level: terrain, sight memory, actors and ground items.
//!
//! Cells are stored row-major and indexed by `y * width + x`. Every query
//! accepts out-of-bounds positions and answers with a safe default instead
//! of panicking.

use super::{Actor, EntityId, Item, Position, Tile};

/// Errors raised when rebuilding a grid from stored parts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("{layer} layer holds {actual} cells, expected {expected}")]
    LayerSizeMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what} at {position} lies outside the grid")]
    OutsideGrid {
        what: &'static str,
        position: Position,
    },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridParts"))]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    /// Cells in line of sight this turn. Rebuilt by every FOV pass.
    visible: Vec<bool>,
    /// Cells ever seen. Only ever set, never cleared.
    explored: Vec<bool>,
    /// Actor arena indexed by [`EntityId`]; removed actors leave `None`.
    actors: Vec<Option<Actor>>,
    items: Vec<Item>,
}

impl Grid {
    /// Creates a grid filled with one tile.
    pub fn new(width: i32, height: i32, fill: Tile) -> Result<Self, GridError> {
        let cells = Self::cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            tiles: vec![fill; cells],
            visible: vec![false; cells],
            explored: vec![false; cells],
            actors: Vec::new(),
            items: Vec::new(),
        })
    }

    /// Rebuilds a grid from stored layers. Visibility starts empty.
    ///
    /// Every layer must hold `width * height` cells and every actor and item
    /// must stand inside the grid.
    pub fn from_parts(
        width: i32,
        height: i32,
        tiles: Vec<Tile>,
        explored: Vec<bool>,
        actors: Vec<Option<Actor>>,
        items: Vec<Item>,
    ) -> Result<Self, GridError> {
        let cells = Self::cell_count(width, height)?;
        for (layer, actual) in [("tile", tiles.len()), ("explored", explored.len())] {
            if actual != cells {
                return Err(GridError::LayerSizeMismatch {
                    layer,
                    expected: cells,
                    actual,
                });
            }
        }
        let grid = Self {
            width,
            height,
            tiles,
            visible: vec![false; cells],
            explored,
            actors,
            items,
        };
        let stray_actor = grid
            .actors()
            .map(|actor| ("actor", actor.position()))
            .find(|&(_, position)| !grid.in_bounds(position));
        let stray_item = grid
            .items
            .iter()
            .map(|item| ("item", item.position()))
            .find(|&(_, position)| !grid.in_bounds(position));
        if let Some((what, position)) = stray_actor.or(stray_item) {
            return Err(GridError::OutsideGrid { what, position });
        }
        Ok(grid)
    }

    fn cell_count(width: i32, height: i32) -> Result<usize, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(width as usize * height as usize)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    #[inline]
    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    // ===== terrain =====

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.index(position).map(|i| &self.tiles[i])
    }

    /// Replaces the terrain at a cell. Returns false when out of bounds.
    pub fn set_tile(&mut self, position: Position, tile: Tile) -> bool {
        match self.index(position) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Terrain-only passability; ignores occupants.
    pub fn is_passable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_walkable)
    }

    pub fn is_transparent(&self, position: Position) -> bool {
        self.tile(position).is_some_and(Tile::is_transparent)
    }

    /// Passable terrain with no movement-blocking entity on it.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.is_passable(position) && self.entity_blocking_at(position).is_none()
    }

    // ===== sight =====

    pub fn is_visible(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.visible[i])
    }

    pub fn is_explored(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| self.explored[i])
    }

    pub fn explored(&self) -> &[bool] {
        &self.explored
    }

    pub(crate) fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Marks a cell visible and explored.
    pub(crate) fn reveal(&mut self, position: Position) {
        if let Some(i) = self.index(position) {
            self.visible[i] = true;
            self.explored[i] = true;
        }
    }

    // ===== actors =====

    /// Places an actor and assigns its id.
    pub fn add_actor(&mut self, mut actor: Actor) -> EntityId {
        debug_assert!(
            self.in_bounds(actor.position()),
            "actor placed outside the grid"
        );
        let id = EntityId(self.actors.len() as u32);
        actor.id = id;
        self.actors.push(Some(actor));
        id
    }

    pub fn remove_actor(&mut self, id: EntityId) -> Option<Actor> {
        self.actors.get_mut(id.index()).and_then(Option::take)
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.get(id.index()).and_then(Option::as_ref)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut Actor> {
        self.actors.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Actors in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = &Actor> {
        self.actors.iter().flatten()
    }

    /// Ids of the actors currently placed, in insertion order.
    pub fn actor_ids(&self) -> Vec<EntityId> {
        self.actors().map(|actor| actor.id).collect()
    }

    /// Arena slots including holes left by removed actors.
    pub fn actor_slots(&self) -> &[Option<Actor>] {
        &self.actors
    }

    /// Moves an actor without any legality check. Callers validate first.
    pub fn move_actor(&mut self, id: EntityId, to: Position) -> bool {
        debug_assert!(self.in_bounds(to), "actor {id} moved outside the grid");
        match self.actor_mut(id) {
            Some(actor) => {
                actor.entity.position = to;
                true
            }
            None => false,
        }
    }

    /// First movement-blocking actor at a cell, in insertion order.
    pub fn entity_blocking_at(&self, position: Position) -> Option<&Actor> {
        self.actors()
            .find(|actor| actor.entity.blocks_movement && actor.position() == position)
    }

    /// First actor with a combat profile at a cell.
    pub fn actor_at(&self, position: Position) -> Option<&Actor> {
        self.actors()
            .find(|actor| actor.fighter.is_some() && actor.position() == position)
    }

    // ===== items =====

    pub fn add_item(&mut self, item: Item) {
        debug_assert!(self.in_bounds(item.position()), "item placed outside the grid");
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.position() == position)
    }

    /// Takes the first item lying at a cell off the ground.
    pub fn take_item_at(&mut self, position: Position) -> Option<Item> {
        let index = self.items.iter().position(|item| item.position() == position)?;
        Some(self.items.remove(index))
    }

    pub fn remove_item(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

/// Serialized shape of a [`Grid`], checked on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridParts {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    actors: Vec<Option<Actor>>,
    items: Vec<Item>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridParts> for Grid {
    type Error = GridError;

    fn try_from(parts: GridParts) -> Result<Self, Self::Error> {
        let mut grid = Grid::from_parts(
            parts.width,
            parts.height,
            parts.tiles,
            parts.explored,
            parts.actors,
            parts.items,
        )?;
        if parts.visible.len() != grid.visible.len() {
            return Err(GridError::LayerSizeMismatch {
                layer: "visible",
                expected: grid.visible.len(),
                actual: parts.visible.len(),
            });
        }
        grid.visible = parts.visible;
        Ok(grid)
    }
}
