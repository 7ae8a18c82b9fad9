use super::{Entity, Position, Rgb};

/// A pickable object. Owned by the grid while on the ground and by an
/// inventory while carried; never both.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub entity: Entity,
    pub consumable: bool,
    /// Hunger restored when eaten.
    pub nutrition: u32,
    /// Thirst restored when drunk.
    pub hydration: u32,
    /// Health restored when used.
    pub healing: u32,
}

impl Item {
    pub fn new(position: Position, glyph: char, color: Rgb, name: impl Into<String>) -> Self {
        Self {
            entity: Entity::new(position, glyph, color, name, false),
            consumable: false,
            nutrition: 0,
            hydration: 0,
            healing: 0,
        }
    }

    /// Marks the item consumable with the given effects (builder pattern).
    #[must_use]
    pub fn consumable(mut self, nutrition: u32, hydration: u32, healing: u32) -> Self {
        self.consumable = true;
        self.nutrition = nutrition;
        self.hydration = hydration;
        self.healing = healing;
        self
    }

    /// Corpse left behind when a non-player actor dies.
    pub fn corpse_of(name: &str, position: Position) -> Self {
        Self::new(position, '%', Rgb::CORPSE, format!("{name} corpse")).consumable(100, 20, 0)
    }

    pub fn name(&self) -> &str {
        &self.entity.name
    }

    pub fn position(&self) -> Position {
        self.entity.position
    }
}
