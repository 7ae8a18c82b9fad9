use rand::RngCore;

use super::{AiContext, Behavior, chase, wander};
use crate::state::Offset;

/// Aggressive policy: chase and attack the target once it is noticed.
///
/// The actor notices the target when it stands within `detection_range`
/// (Chebyshev) and on a cell the player can currently see. Until then it
/// wanders.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileAi {
    pub detection_range: u32,
    /// Chance per turn of taking a random step while unaware.
    pub wander_chance: f64,
}

impl HostileAi {
    pub const DEFAULT_DETECTION_RANGE: u32 = 8;
    pub const DEFAULT_WANDER_CHANCE: f64 = 0.25;

    pub fn new(detection_range: u32) -> Self {
        Self {
            detection_range,
            wander_chance: Self::DEFAULT_WANDER_CHANCE,
        }
    }

    fn notices_target(&self, ctx: &AiContext<'_>) -> bool {
        ctx.to_target().chebyshev_len() <= self.detection_range
            && ctx.grid.is_visible(ctx.actor.position())
    }
}

impl Default for HostileAi {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DETECTION_RANGE)
    }
}

impl Behavior for HostileAi {
    fn decide(&self, ctx: &AiContext<'_>, rng: &mut dyn RngCore) -> Option<Offset> {
        if !self.notices_target(ctx) {
            return wander(ctx, self.wander_chance, rng);
        }
        chase(ctx)
    }
}
