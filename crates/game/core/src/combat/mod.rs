//! Melee resolution.
//!
//! One formula in both directions: the defender loses
//! `max(0, attacker.power - defender.defense)` health and is dead once its
//! health reaches zero. A zero-damage hit is a normal outcome.

use crate::state::Fighter;

/// Result of one melee exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Damage after defense.
    pub damage: u32,
    pub defender_dead: bool,
}

/// Applies `attacker`'s power to `defender`.
pub fn resolve_attack(attacker: &Fighter, defender: &mut Fighter) -> AttackOutcome {
    let damage = defender.take_damage(attacker.power());
    AttackOutcome {
        damage,
        defender_dead: !defender.is_alive(),
    }
}
