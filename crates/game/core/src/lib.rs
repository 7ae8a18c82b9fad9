//! Deterministic turn-based simulation for an ASCII survival roguelike.
//!
//! `hearthwild-core` defines the rules (grid, sight, routing, AI, combat,
//! survival) and exposes pure APIs that the runtime and offline tools share.
//! All state mutation during play flows through [`engine::GameEngine`]; every
//! random draw comes from an RNG the caller passes in.
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod fov;
pub mod pathfinding;
pub mod state;

pub use ai::{AiBehavior, AiContext, Behavior, HostileAi, PassiveAi};
pub use combat::{AttackOutcome, resolve_attack};
pub use config::GameConfig;
pub use engine::{ActionError, AiAttack, GameEngine, PlayerAction, PlayerOutcome, TurnReport};
pub use error::{ErrorSeverity, GameError};
pub use fov::compute_fov;
pub use pathfinding::find_path;
pub use state::{
    Actor, ClockTick, DayPeriod, Entity, EntityId, Fighter, GamePhase, GameState, Grid,
    GridError, Inventory, Item, Message, MessageLog, Offset, Position, Rgb, Survival,
    SurvivalMessages, SurvivalStatus, Tile, TileFlags, TileKind, WorldClock,
};
