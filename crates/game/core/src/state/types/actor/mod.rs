//! Actor-related state types.
//!
//! An [`Actor`] is a placed [`Entity`] plus optional capabilities:
//! - Fighter: health, defense, power
//! - Inventory: carried items
//! - Survival: hunger, thirst, temperature, stamina
//! - AI: decision policy for non-player actors
//!
//! Capabilities compose freely; an actor can carry any subset.

pub mod fighter;
pub mod inventory;
pub mod survival;

pub use fighter::Fighter;
pub use inventory::Inventory;
pub use survival::{Survival, SurvivalMessages, SurvivalStatus};

use super::{EntityId, Position, Rgb};
use crate::ai::AiBehavior;

/// Anything drawn on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub position: Position,
    pub glyph: char,
    pub color: Rgb,
    pub name: String,
    /// Other movers may not enter a cell holding a blocking entity.
    pub blocks_movement: bool,
}

impl Entity {
    pub fn new(
        position: Position,
        glyph: char,
        color: Rgb,
        name: impl Into<String>,
        blocks_movement: bool,
    ) -> Self {
        Self {
            position,
            glyph,
            color,
            name: name.into(),
            blocks_movement,
        }
    }
}

/// An entity that can act, fight, carry or starve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    /// Arena slot assigned by the grid. Meaningless until the actor is added.
    pub id: EntityId,
    pub entity: Entity,
    pub fighter: Option<Fighter>,
    pub inventory: Option<Inventory>,
    pub survival: Option<Survival>,
    pub ai: Option<AiBehavior>,
}

impl Actor {
    /// Creates a blocking actor without capabilities.
    pub fn new(position: Position, glyph: char, color: Rgb, name: impl Into<String>) -> Self {
        Self {
            id: EntityId(0),
            entity: Entity::new(position, glyph, color, name, true),
            fighter: None,
            inventory: None,
            survival: None,
            ai: None,
        }
    }

    #[must_use]
    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    #[must_use]
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    #[must_use]
    pub fn with_survival(mut self, survival: Survival) -> Self {
        self.survival = Some(survival);
        self
    }

    #[must_use]
    pub fn with_ai(mut self, ai: AiBehavior) -> Self {
        self.ai = Some(ai);
        self
    }

    /// Alive iff the actor has a combat profile with health above zero.
    pub fn is_alive(&self) -> bool {
        self.fighter.as_ref().is_some_and(Fighter::is_alive)
    }

    pub fn position(&self) -> Position {
        self.entity.position
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }
}
