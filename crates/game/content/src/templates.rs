//! Actor and item templates.
//!
//! A template is static content: it names a kind of creature or object and
//! the stats every instance starts with. Spawning turns a template into a
//! core [`Actor`] or [`Item`] placed at a position.

use hearthwild_core::{
    Actor, AiBehavior, Fighter, HostileAi, Inventory, Item, PassiveAi, Position, Rgb, Survival,
};

/// Which AI drives a spawned actor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiSpec {
    Hostile {
        detection_range: u32,
    },
    Passive {
        /// Health fraction under which the actor runs away.
        flee_below: f32,
        /// Starts out aggressive instead of waiting to be provoked.
        #[cfg_attr(feature = "serde", serde(default))]
        hostile: bool,
    },
}

impl AiSpec {
    pub fn build(&self) -> AiBehavior {
        match *self {
            Self::Hostile { detection_range } => HostileAi::new(detection_range).into(),
            Self::Passive {
                flee_below,
                hostile,
            } => PassiveAi::new(flee_below, hostile).into(),
        }
    }
}

/// Blueprint for a creature.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    /// Catalog key referenced by maps.
    pub id: String,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub hp: u32,
    pub defense: u32,
    pub power: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai: Option<AiSpec>,
    /// Inventory capacity, if the actor carries things.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Option<usize>,
    /// Whether the actor tracks hunger, thirst and body temperature.
    #[cfg_attr(feature = "serde", serde(default))]
    pub survival: bool,
}

impl ActorTemplate {
    /// Creates a fresh actor from this template at `position`.
    ///
    /// The returned actor has no id yet; [`Grid::add_actor`] assigns one.
    ///
    /// [`Grid::add_actor`]: hearthwild_core::Grid::add_actor
    pub fn spawn(&self, position: Position) -> Actor {
        let mut actor = Actor::new(position, self.glyph, self.color, self.name.clone())
            .with_fighter(Fighter::new(self.hp, self.defense, self.power));
        if let Some(ai) = &self.ai {
            actor = actor.with_ai(ai.build());
        }
        if let Some(capacity) = self.inventory {
            actor = actor.with_inventory(Inventory::new(capacity));
        }
        if self.survival {
            actor = actor.with_survival(Survival::default());
        }
        actor
    }
}

/// Blueprint for an object lying on the ground or carried.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub id: String,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nutrition: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hydration: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub healing: u32,
}

impl ItemTemplate {
    pub fn spawn(&self, position: Position) -> Item {
        let item = Item::new(position, self.glyph, self.color, self.name.clone());
        if self.consumable {
            item.consumable(self.nutrition, self.hydration, self.healing)
        } else {
            item
        }
    }
}
