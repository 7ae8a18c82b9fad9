//! Turn resolution.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. A turn
//! always runs the same four steps in order:
//!
//! 1. the player's action (move, melee, wait, item handling)
//! 2. every AI-controlled actor, over a snapshot of the actor list
//! 3. the world tick (clock, survival decay, starvation damage)
//! 4. a visibility refresh around the player
//!
//! A failed player action stops the turn before step 2 and consumes nothing.

mod errors;
mod player;
mod world;

pub use errors::ActionError;

use rand::RngCore;

use crate::combat::AttackOutcome;
use crate::config::GameConfig;
use crate::state::{Actor, EntityId, GamePhase, GameState, Offset, Position, Rgb};

/// Input accepted by [`GameEngine::take_turn`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    Move(Offset),
    Wait,
    PickUp,
    UseItem(usize),
    DropItem(usize),
}

/// What the player's half of a turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerOutcome {
    Moved {
        to: Position,
        /// Names of the items lying on the new cell.
        items_here: Vec<String>,
    },
    Attacked {
        target: EntityId,
        outcome: AttackOutcome,
    },
    Waited,
    PickedUp {
        item: String,
    },
    Used {
        item: String,
    },
    Dropped {
        item: String,
    },
}

/// An attack made by an AI-controlled actor during the AI phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiAttack {
    pub attacker: EntityId,
    pub outcome: AttackOutcome,
}

/// Summary of one resolved turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Turn counter after the world tick.
    pub turn: u64,
    pub player: PlayerOutcome,
    pub ai_attacks: Vec<AiAttack>,
    /// The player died during this turn.
    pub player_died: bool,
}

pub(crate) mod palette {
    use crate::state::Rgb;

    pub const INFO: Rgb = Rgb::WHITE;
    pub const PLAYER_ATTACK: Rgb = Rgb(224, 224, 224);
    pub const ENEMY_ATTACK: Rgb = Rgb(255, 192, 192);
    pub const DEATH: Rgb = Rgb::ORANGE;
    pub const PLAYER_DEATH: Rgb = Rgb::RED;
    pub const WARNING: Rgb = Rgb::YELLOW;
    pub const FAILURE: Rgb = Rgb::GRAY;
}

/// Game engine that resolves player actions, AI turns and world ticks.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves one full turn.
    ///
    /// # Errors
    ///
    /// Returns the player step's [`ActionError`] when it fails; the message is
    /// also written to the log and nothing else happens this turn.
    pub fn take_turn(
        &mut self,
        action: PlayerAction,
        rng: &mut dyn RngCore,
    ) -> Result<TurnReport, ActionError> {
        self.ensure_playing()?;
        let was_alive = self.player()?.is_alive();

        let result = match action {
            PlayerAction::Move(offset) => self.apply_player_action(offset),
            PlayerAction::Wait => Ok(PlayerOutcome::Waited),
            PlayerAction::PickUp => self.pickup_item(),
            PlayerAction::UseItem(index) => self.use_item(index),
            PlayerAction::DropItem(index) => self.drop_item(index),
        };
        let player = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::debug!("player action {:?} refused: {}", action, error);
                self.say(error.to_string(), palette::FAILURE);
                return Err(error);
            }
        };

        let ai_attacks = self.run_ai_turn(rng);
        self.tick_world();
        self.refresh_visibility();

        Ok(TurnReport {
            turn: self.state.clock.turn,
            player,
            ai_attacks,
            player_died: was_alive && self.state.phase == GamePhase::PlayerDead,
        })
    }

    fn ensure_playing(&self) -> Result<(), ActionError> {
        match self.state.phase {
            GamePhase::Playing => Ok(()),
            phase => Err(ActionError::NotPlaying { phase }),
        }
    }

    fn player(&self) -> Result<&Actor, ActionError> {
        self.state
            .grid
            .actor(self.state.player)
            .ok_or(ActionError::PlayerMissing)
    }

    fn player_mut(&mut self) -> Result<&mut Actor, ActionError> {
        self.state
            .grid
            .actor_mut(self.state.player)
            .ok_or(ActionError::PlayerMissing)
    }

    fn say(&mut self, text: impl Into<String>, color: Rgb) {
        self.state.log.add(text, color);
    }
}

/// Capitalizes the first letter of a display name for sentence starts.
fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
