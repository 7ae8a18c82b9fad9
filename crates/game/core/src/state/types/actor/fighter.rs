//! Combat profile attached to actors that can fight and die.

/// Health, defense and attack power.
///
/// # Invariants
///
/// `hp` is always within `0..=max_hp`. Every mutation goes through a
/// clamping method; fields are private so a deserialized or hand-built
/// profile must use [`Fighter::from_parts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    max_hp: u32,
    hp: u32,
    defense: u32,
    power: u32,
}

impl Fighter {
    /// Creates a profile at full health.
    pub const fn new(max_hp: u32, defense: u32, power: u32) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            defense,
            power,
        }
    }

    /// Rebuilds a profile from stored values. `hp` is clamped to `max_hp`.
    pub fn from_parts(max_hp: u32, hp: u32, defense: u32, power: u32) -> Self {
        Self {
            max_hp,
            hp: hp.min(max_hp),
            defense,
            power,
        }
    }

    pub const fn hp(&self) -> u32 {
        self.hp
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn defense(&self) -> u32 {
        self.defense
    }

    pub const fn power(&self) -> u32 {
        self.power
    }

    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Current health as a fraction of maximum, in `0.0..=1.0`.
    pub fn health_fraction(&self) -> f32 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f32 / self.max_hp as f32
    }

    /// Applies an incoming hit, reduced by this profile's defense.
    ///
    /// # Returns
    ///
    /// The damage after defense, `max(0, amount - defense)`. Health is
    /// floored at zero, so the health lost can be smaller than this.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.saturating_sub(self.defense);
        self.hp = self.hp.saturating_sub(actual);
        debug_assert!(self.hp <= self.max_hp);
        actual
    }

    /// Removes health directly, ignoring defense (starvation, dehydration).
    pub fn lose_health(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Restores health up to the maximum and returns the amount gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        debug_assert!(self.hp <= self.max_hp);
        self.hp - before
    }
}
