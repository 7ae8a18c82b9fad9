//! World-driven steps of a turn: AI actors, the clock, sight, and death.

use rand::RngCore;

use super::{AiAttack, GameEngine, capitalized, palette};
use crate::ai::{AiContext, Behavior};
use crate::fov::compute_fov;
use crate::state::{EntityId, GamePhase, Item, Position, Rgb};

impl GameEngine<'_> {
    /// Lets every living AI-controlled actor act once.
    ///
    /// The actor list is snapshotted first: actors killed during the phase
    /// are skipped, and none added during it act until the next turn. A
    /// decision that lands on the player's cell is an attack; any other
    /// decision moves the actor if the destination is walkable.
    ///
    /// # Returns
    ///
    /// The attacks made against the player, in order.
    pub fn run_ai_turn(&mut self, rng: &mut dyn RngCore) -> Vec<AiAttack> {
        let player_id = self.state.player;
        let acting: Vec<EntityId> = self
            .state
            .grid
            .actors()
            .filter(|actor| actor.id != player_id && actor.is_alive() && actor.ai.is_some())
            .map(|actor| actor.id)
            .collect();

        let mut attacks = Vec::new();
        for id in acting {
            if self.state.phase == GamePhase::PlayerDead {
                break;
            }
            let Some((destination, player_position)) = self.decide(id, rng) else {
                continue;
            };

            if destination == player_position {
                match self.melee(id, player_id) {
                    Ok(outcome) => attacks.push(AiAttack {
                        attacker: id,
                        outcome,
                    }),
                    Err(error) => tracing::warn!("NPC {:?} could not attack: {}", id, error),
                }
            } else if self.state.grid.is_walkable(destination) {
                self.state.grid.move_actor(id, destination);
                tracing::debug!("NPC {:?} moved to {}", id, destination);
            }
        }
        attacks
    }

    /// Asks one actor's AI for a destination cell.
    fn decide(&self, id: EntityId, rng: &mut dyn RngCore) -> Option<(Position, Position)> {
        let grid = &self.state.grid;
        let actor = grid.actor(id).filter(|actor| actor.is_alive())?;
        let ai = actor.ai.as_ref()?;
        let target = grid.actor(self.state.player)?;

        let ctx = AiContext::new(actor, target, grid);
        let offset = ai.decide(&ctx, rng)?;
        tracing::debug!("NPC {:?} decided {}", id, offset);
        Some((actor.position() + offset, target.position()))
    }

    /// Advances the clock and applies the player's survival decay.
    ///
    /// A starving or dehydrated player loses one health per tick, ignoring
    /// defense, and dies when it reaches zero.
    pub fn tick_world(&mut self) {
        let tick = self.state.clock.advance(self.config);
        if tick.new_day {
            let text = format!("Day {} dawns.", self.state.clock.day);
            tracing::info!("{}", text);
            self.say(text, palette::INFO);
        }
        if self.state.phase == GamePhase::PlayerDead {
            return;
        }

        let ambient = self.state.clock.ambient_temperature;
        let Some(player) = self.state.grid.actor_mut(self.state.player) else {
            return;
        };
        let Some(survival) = player.survival.as_mut() else {
            return;
        };
        let messages = survival.process_turn(ambient);
        let deprived = survival.is_starving() || survival.is_dehydrated();
        let died = match player.fighter.as_mut() {
            Some(fighter) if deprived => {
                fighter.lose_health(1);
                !fighter.is_alive()
            }
            _ => false,
        };

        for message in messages {
            self.say(message, palette::WARNING);
        }
        if died {
            self.kill(self.state.player);
        }
    }

    /// Recomputes the player's field of view.
    pub fn refresh_visibility(&mut self) {
        if let Some(origin) = self.state.player_position() {
            compute_fov(
                &mut self.state.grid,
                origin,
                self.config.fov_radius,
                self.config.light_walls,
            );
        }
    }

    /// Handles a death: the player becomes a corpse glyph in place, anyone
    /// else is replaced by a corpse item and drops what it carried.
    pub(super) fn kill(&mut self, id: EntityId) {
        if id == self.state.player {
            if let Some(player) = self.state.grid.actor_mut(id) {
                player.entity.glyph = '%';
                player.entity.color = Rgb::PLAYER_CORPSE;
            }
            self.state.phase = GamePhase::PlayerDead;
            tracing::info!("player died on turn {}", self.state.clock.turn);
            self.say("You died!", palette::PLAYER_DEATH);
            return;
        }

        let Some(mut actor) = self.state.grid.remove_actor(id) else {
            return;
        };
        let position = actor.position();
        self.state
            .grid
            .add_item(Item::corpse_of(actor.name(), position));
        if let Some(inventory) = actor.inventory.as_mut() {
            for mut item in inventory.drain() {
                item.entity.position = position;
                self.state.grid.add_item(item);
            }
        }
        tracing::info!("{} {:?} died at {}", actor.name(), id, position);
        self.say(
            format!("{} is dead!", capitalized(actor.name())),
            palette::DEATH,
        );
    }
}
