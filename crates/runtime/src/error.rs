//! Unified error types surfaced by the runtime API.

use hearthwild_core::{ActionError, ErrorSeverity, GameError, Position};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The engine refused the player's action; no turn was consumed.
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("no route from {from} to {goal}")]
    NoRoute { from: Position, goal: Position },

    #[error("no saved state for turn {turn}")]
    MissingState { turn: u64 },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(error) => error.severity(),
            Self::NoRoute { .. } => ErrorSeverity::Recoverable,
            Self::MissingState { .. } => ErrorSeverity::Validation,
            Self::Repository(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action(error) => error.error_code(),
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::NoRoute { .. } => "RUNTIME_NO_ROUTE",
            Self::MissingState { .. } => "RUNTIME_MISSING_STATE",
        }
    }
}
