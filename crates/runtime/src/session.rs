//! Single-player session driver.
//!
//! A [`Session`] owns the game state, the configuration and the seeded RNG.
//! Front-ends translate input into [`Command`]s and submit them one at a
//! time; everything else (AI, clock, sight) happens inside the engine.

use hearthwild_core::{
    ActionError, GameConfig, GameEngine, GamePhase, GameState, Offset, PlayerAction, Position,
    TurnReport, find_path,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, RuntimeError};
use crate::repository::StateRepository;

/// Player input understood by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Step or attack in a direction.
    Move(Offset),
    Wait,
    PickUp,
    UseItem(usize),
    DropItem(usize),
    /// Start or stop resting. Free.
    ToggleRest,
    /// Take one step along the shortest route to a cell.
    Travel(Position),
}

/// Result of an accepted command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Turn(TurnReport),
    Rest { resting: bool },
}

impl CommandOutcome {
    /// The turn report, for commands that consumed a turn.
    pub fn report(&self) -> Option<&TurnReport> {
        match self {
            Self::Turn(report) => Some(report),
            Self::Rest { .. } => None,
        }
    }
}

pub struct Session {
    state: GameState,
    config: GameConfig,
    seed: u64,
    rng: ChaCha8Rng,
}

impl Session {
    /// Starts a session whose every random draw derives from `seed`.
    pub fn new(state: GameState, config: GameConfig, seed: u64) -> Self {
        tracing::info!("session started with seed {}", seed);
        Self {
            state,
            config,
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Resumes from a saved snapshot.
    ///
    /// The RNG stream is not part of the snapshot; it restarts from `seed`.
    pub fn load(
        repository: &dyn StateRepository,
        turn: u64,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self> {
        let state = repository
            .load(turn)?
            .ok_or(RuntimeError::MissingState { turn })?;
        Ok(Self::new(state, config, seed))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn turn(&self) -> u64 {
        self.state.clock.turn
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == GamePhase::PlayerDead
    }

    /// Runs one command against the engine.
    ///
    /// # Errors
    ///
    /// Refused actions surface as [`RuntimeError::Action`] and consume no
    /// turn; the reason is also in the message log.
    pub fn submit(&mut self, command: Command) -> Result<CommandOutcome> {
        let result = self.dispatch(command);
        if let Err(error) = &result {
            tracing::warn!("command {:?} refused: {}", command, error);
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        let action = match command {
            Command::Move(offset) => PlayerAction::Move(offset),
            Command::Wait => PlayerAction::Wait,
            Command::PickUp => PlayerAction::PickUp,
            Command::UseItem(index) => PlayerAction::UseItem(index),
            Command::DropItem(index) => PlayerAction::DropItem(index),
            Command::ToggleRest => {
                let resting = GameEngine::new(&mut self.state, &self.config).toggle_rest()?;
                return Ok(CommandOutcome::Rest { resting });
            }
            Command::Travel(goal) => PlayerAction::Move(self.next_step(goal)?),
        };

        let mut engine = GameEngine::new(&mut self.state, &self.config);
        let report = engine.take_turn(action, &mut self.rng)?;
        if report.player_died {
            tracing::info!("player died on turn {} (seed {})", report.turn, self.seed);
        }
        Ok(CommandOutcome::Turn(report))
    }

    /// First step of the shortest route from the player to `goal`.
    fn next_step(&self, goal: Position) -> Result<Offset> {
        let from = self
            .state
            .player_position()
            .ok_or(ActionError::PlayerMissing)?;
        let route = find_path(&self.state.grid, from, goal);
        let step = route
            .first()
            .copied()
            .ok_or(RuntimeError::NoRoute { from, goal })?;
        tracing::debug!("travel {} -> {}: {} steps", from, goal, route.len());
        Ok(from.delta_to(step))
    }

    /// Writes the current state under its turn number.
    pub fn save(&self, repository: &dyn StateRepository) -> Result<u64> {
        let turn = self.turn();
        repository.save(turn, &self.state)?;
        tracing::info!("saved turn {}", turn);
        Ok(turn)
    }
}
