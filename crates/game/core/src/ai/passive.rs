use rand::RngCore;

use super::{AiContext, Behavior, chase, wander};
use crate::state::Offset;

/// Animal policy: graze, bolt when hurt, bite back once provoked.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveAi {
    hostile: bool,
    /// Health fraction below which the actor runs from the target.
    pub flee_below: f32,
    /// Chance per turn of taking a random step while calm.
    pub wander_chance: f64,
}

impl PassiveAi {
    pub const DEFAULT_FLEE_BELOW: f32 = 0.3;
    pub const DEFAULT_WANDER_CHANCE: f64 = 0.10;

    pub fn new(flee_below: f32, hostile: bool) -> Self {
        Self {
            hostile,
            flee_below,
            wander_chance: Self::DEFAULT_WANDER_CHANCE,
        }
    }

    pub fn is_hostile(&self) -> bool {
        self.hostile
    }

    /// Turns the actor hostile for the rest of its life.
    pub fn become_hostile(&mut self) {
        self.hostile = true;
    }

    fn wants_to_flee(&self, ctx: &AiContext<'_>) -> bool {
        ctx.actor
            .fighter
            .as_ref()
            .is_some_and(|fighter| fighter.health_fraction() < self.flee_below)
    }
}

impl Default for PassiveAi {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FLEE_BELOW, false)
    }
}

impl Behavior for PassiveAi {
    fn decide(&self, ctx: &AiContext<'_>, rng: &mut dyn RngCore) -> Option<Offset> {
        if self.wants_to_flee(ctx) {
            let away = ctx.to_target().signum().reversed();
            if !away.is_zero() && ctx.grid.is_walkable(ctx.actor.position() + away) {
                return Some(away);
            }
            return wander(ctx, self.wander_chance, rng);
        }
        if self.hostile {
            return chase(ctx);
        }
        wander(ctx, self.wander_chance, rng)
    }
}
