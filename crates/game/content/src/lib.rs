//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Actor templates (data-driven via RON)
//! - Item catalogs (data-driven via RON)
//! - Map layouts drawn as ASCII rows (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Loaders hand a populated [`hearthwild_core::GameState`] to the runtime;
//! templates never appear in game state themselves.

pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use templates::{ActorTemplate, AiSpec, ItemTemplate};

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult, MapDefinition, MapLoader,
};
