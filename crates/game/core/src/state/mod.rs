//! Authoritative game state representation.
//!
//! [`GameState`] is plain data: the level grid, the player's id, the phase,
//! the clock and the message log. Runtime layers clone, persist or query it
//! but mutate it exclusively through [`GameEngine`](crate::engine::GameEngine).
pub mod types;

pub use types::{
    Actor, ClockTick, DayPeriod, Entity, EntityId, Fighter, GamePhase, Grid, GridError,
    Inventory, Item, Message, MessageLog, Offset, Position, Rgb, Survival, SurvivalMessages,
    SurvivalStatus, Tile, TileFlags, TileKind, WorldClock,
};

use crate::config::GameConfig;

/// Canonical snapshot of one running session.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub grid: Grid,
    /// Arena id of the player-controlled actor.
    pub player: EntityId,
    pub phase: GamePhase,
    pub clock: WorldClock,
    pub log: MessageLog,
}

impl GameState {
    /// Wraps a populated grid. `player` must already be placed on it.
    pub fn new(grid: Grid, player: EntityId, config: &GameConfig) -> Self {
        debug_assert!(grid.actor(player).is_some(), "player {player} is not on the grid");
        Self {
            grid,
            player,
            phase: GamePhase::Playing,
            clock: WorldClock::new(config),
            log: MessageLog::new(config.message_log_capacity),
        }
    }

    pub fn player(&self) -> Option<&Actor> {
        self.grid.actor(self.player)
    }

    pub fn player_position(&self) -> Option<Position> {
        self.player().map(Actor::position)
    }
}
