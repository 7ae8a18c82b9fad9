//! Session runtime for the hearthwild simulation.
//!
//! Wraps a [`GameState`](hearthwild_core::GameState) with the seeded RNG and
//! the command dispatch a front-end needs, plus repositories for saving and
//! loading snapshots.
//!
//! - [`session`] drives turns from player [`Command`]s
//! - [`repository`] persists state snapshots in memory or on disk
pub mod error;
pub mod repository;
pub mod session;

pub use error::{Result, RuntimeError};
pub use repository::{
    FileStateRepository, InMemoryStateRepository, RepositoryError, StateRepository,
};
pub use session::{Command, CommandOutcome, Session};
