//! Error types for player actions.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, GamePhase, Position};

/// Why a player action did not consume a turn.
///
/// The `Display` text is what the player reads in the message log.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("the world is paused ({phase})")]
    NotPlaying { phase: GamePhase },

    #[error("you can't go that way")]
    OutOfBounds { destination: Position },

    #[error("that way is blocked")]
    Blocked { destination: Position },

    #[error("there is nothing here to pick up")]
    NothingToPickUp,

    #[error("your inventory is full")]
    InventoryFull,

    #[error("you have no inventory")]
    NoInventory,

    #[error("you have no needs to rest from")]
    NoSurvival,

    #[error("there is no item in slot {index}")]
    NoSuchItem { index: usize },

    #[error("the {name} cannot be used")]
    NotConsumable { name: String },

    #[error("the player is not on the grid")]
    PlayerMissing,

    #[error("actor {entity} has no combat profile")]
    NoCombatProfile { entity: EntityId },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OutOfBounds { .. }
            | Self::Blocked { .. }
            | Self::NothingToPickUp
            | Self::InventoryFull => ErrorSeverity::Recoverable,
            Self::NotPlaying { .. }
            | Self::NoInventory
            | Self::NoSurvival
            | Self::NoSuchItem { .. }
            | Self::NotConsumable { .. } => ErrorSeverity::Validation,
            Self::PlayerMissing | Self::NoCombatProfile { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotPlaying { .. } => "ACTION_NOT_PLAYING",
            Self::OutOfBounds { .. } => "ACTION_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "ACTION_BLOCKED",
            Self::NothingToPickUp => "ACTION_NOTHING_TO_PICK_UP",
            Self::InventoryFull => "ACTION_INVENTORY_FULL",
            Self::NoInventory => "ACTION_NO_INVENTORY",
            Self::NoSurvival => "ACTION_NO_SURVIVAL",
            Self::NoSuchItem { .. } => "ACTION_NO_SUCH_ITEM",
            Self::NotConsumable { .. } => "ACTION_NOT_CONSUMABLE",
            Self::PlayerMissing => "ACTION_PLAYER_MISSING",
            Self::NoCombatProfile { .. } => "ACTION_NO_COMBAT_PROFILE",
        }
    }
}
