//! Decision policies for non-player actors.
//!
//! Each turn the engine builds an [`AiContext`] for an actor and asks its
//! [`AiBehavior`] for an offset. The AI never mutates the world: the engine
//! turns the offset into an attack when it lands on the target's cell and
//! into a move otherwise.
//!
//! - [`HostileAi`]: chases and attacks the target once it notices it
//! - [`PassiveAi`]: wanders, flees when hurt, fights back once provoked

pub mod hostile;
pub mod passive;

pub use hostile::HostileAi;
pub use passive::PassiveAi;

use rand::RngCore;
use rand::seq::SliceRandom;

use crate::state::{Actor, Grid, Offset};

/// Read-only view handed to a behavior for one decision.
pub struct AiContext<'a> {
    /// The actor deciding.
    pub actor: &'a Actor,
    /// The actor it reacts to (the player).
    pub target: &'a Actor,
    pub grid: &'a Grid,
}

impl<'a> AiContext<'a> {
    pub fn new(actor: &'a Actor, target: &'a Actor, grid: &'a Grid) -> Self {
        Self {
            actor,
            target,
            grid,
        }
    }

    /// Offset from the actor to the target.
    pub fn to_target(&self) -> Offset {
        self.actor.position().delta_to(self.target.position())
    }
}

/// The single operation every policy provides.
pub trait Behavior {
    /// Picks an offset for this turn, or `None` to stay put.
    fn decide(&self, ctx: &AiContext<'_>, rng: &mut dyn RngCore) -> Option<Offset>;
}

/// Policy attached to an actor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiBehavior {
    Hostile(HostileAi),
    Passive(PassiveAi),
}

impl AiBehavior {
    /// Provokes a passive actor. Hostile actors are unaffected.
    pub fn provoke(&mut self) {
        if let Self::Passive(passive) = self {
            passive.become_hostile();
        }
    }

    pub fn is_hostile(&self) -> bool {
        match self {
            Self::Hostile(_) => true,
            Self::Passive(passive) => passive.is_hostile(),
        }
    }
}

impl Behavior for AiBehavior {
    fn decide(&self, ctx: &AiContext<'_>, rng: &mut dyn RngCore) -> Option<Offset> {
        match self {
            Self::Hostile(ai) => ai.decide(ctx, rng),
            Self::Passive(ai) => ai.decide(ctx, rng),
        }
    }
}

impl From<HostileAi> for AiBehavior {
    fn from(ai: HostileAi) -> Self {
        Self::Hostile(ai)
    }
}

impl From<PassiveAi> for AiBehavior {
    fn from(ai: PassiveAi) -> Self {
        Self::Passive(ai)
    }
}

/// With probability `chance`, steps in a random walkable direction.
///
/// Directions are shuffled uniformly and the first walkable one wins, so a
/// boxed-in actor stays put even when the roll succeeds.
pub fn wander(ctx: &AiContext<'_>, chance: f64, rng: &mut dyn RngCore) -> Option<Offset> {
    use rand::Rng;

    if !rng.gen_bool(chance.clamp(0.0, 1.0)) {
        return None;
    }
    let mut directions = Offset::NEIGHBORS;
    directions.shuffle(rng);
    let origin = ctx.actor.position();
    directions
        .into_iter()
        .find(|&offset| ctx.grid.is_walkable(origin + offset))
}

/// Attacks when adjacent, otherwise steps greedily toward the target.
///
/// The greedy step tries the diagonal first, then the horizontal and vertical
/// components, each only if walkable.
pub fn chase(ctx: &AiContext<'_>) -> Option<Offset> {
    let delta = ctx.to_target();
    if delta.chebyshev_len() <= 1 {
        return (!delta.is_zero()).then_some(delta);
    }

    let step = delta.signum();
    let origin = ctx.actor.position();
    let mut candidates = [Some(step), None, None];
    if step.dx != 0 && step.dy != 0 {
        candidates[1] = Some(Offset::new(step.dx, 0));
        candidates[2] = Some(Offset::new(0, step.dy));
    }
    candidates
        .into_iter()
        .flatten()
        .find(|&offset| ctx.grid.is_walkable(origin + offset))
}
