pub mod actor;
pub mod common;
pub mod grid;
pub mod item;
pub mod log;
pub mod tile;
pub mod turn;

pub use actor::{Actor, Entity, Fighter, Inventory, Survival, SurvivalMessages, SurvivalStatus};
pub use common::{EntityId, Offset, Position, Rgb};
pub use grid::{Grid, GridError};
pub use item::Item;
pub use log::{Message, MessageLog};
pub use tile::{Tile, TileFlags, TileKind};
pub use turn::{ClockTick, DayPeriod, GamePhase, WorldClock};
