//! Hunger, thirst, body temperature and stamina.
//!
//! Meters count down toward zero: a full stomach is `max_hunger`, an empty
//! one is `0`. Decay runs once per world tick through [`Survival::process_turn`].

use arrayvec::ArrayVec;

/// Coarse condition of a single survival meter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurvivalStatus {
    Normal,
    Warning,
    Critical,
    Dying,
}

impl SurvivalStatus {
    pub const WARNING_BELOW: u32 = 200;
    pub const CRITICAL_BELOW: u32 = 50;

    fn of_meter(value: u32) -> Self {
        if value == 0 {
            Self::Dying
        } else if value < Self::CRITICAL_BELOW {
            Self::Critical
        } else if value < Self::WARNING_BELOW {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

/// Messages produced by one turn of decay (at most one per meter).
pub type SurvivalMessages = ArrayVec<&'static str, 2>;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Survival {
    max_hunger: u32,
    max_thirst: u32,
    max_stamina: u32,
    hunger: u32,
    thirst: u32,
    stamina: u32,
    body_temperature: f32,
    resting: bool,
}

impl Survival {
    pub const DEFAULT_MAX_HUNGER: u32 = 1000;
    pub const DEFAULT_MAX_THIRST: u32 = 1000;
    pub const DEFAULT_MAX_STAMINA: u32 = 100;
    pub const NORMAL_TEMPERATURE: f32 = 37.0;
    pub const MIN_TEMPERATURE: f32 = 30.0;
    pub const MAX_TEMPERATURE: f32 = 42.0;
    /// Ambient temperature the body feels no pull from.
    pub const COMFORTABLE_AMBIENT: f32 = 22.0;

    const HUNGER_PER_TURN: u32 = 1;
    const THIRST_PER_TURN: u32 = 2;
    const STAMINA_RESTING: u32 = 5;
    const STAMINA_ACTIVE: u32 = 1;
    const TEMPERATURE_SWING: f32 = 0.1;
    const TEMPERATURE_RECOVERY: f32 = 0.05;

    /// Creates a fully fed, rested profile.
    pub fn new(max_hunger: u32, max_thirst: u32, max_stamina: u32) -> Self {
        Self {
            max_hunger,
            max_thirst,
            max_stamina,
            hunger: max_hunger,
            thirst: max_thirst,
            stamina: max_stamina,
            body_temperature: Self::NORMAL_TEMPERATURE,
            resting: false,
        }
    }

    /// Rebuilds a profile from stored values, clamping each to its range.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        max_hunger: u32,
        max_thirst: u32,
        max_stamina: u32,
        hunger: u32,
        thirst: u32,
        stamina: u32,
        body_temperature: f32,
        resting: bool,
    ) -> Self {
        Self {
            max_hunger,
            max_thirst,
            max_stamina,
            hunger: hunger.min(max_hunger),
            thirst: thirst.min(max_thirst),
            stamina: stamina.min(max_stamina),
            body_temperature: body_temperature.clamp(Self::MIN_TEMPERATURE, Self::MAX_TEMPERATURE),
            resting,
        }
    }

    pub fn hunger(&self) -> u32 {
        self.hunger
    }

    pub fn thirst(&self) -> u32 {
        self.thirst
    }

    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    pub fn max_hunger(&self) -> u32 {
        self.max_hunger
    }

    pub fn max_thirst(&self) -> u32 {
        self.max_thirst
    }

    pub fn max_stamina(&self) -> u32 {
        self.max_stamina
    }

    pub fn body_temperature(&self) -> f32 {
        self.body_temperature
    }

    pub fn is_resting(&self) -> bool {
        self.resting
    }

    pub fn is_starving(&self) -> bool {
        self.hunger == 0
    }

    pub fn is_dehydrated(&self) -> bool {
        self.thirst == 0
    }

    pub fn set_hunger(&mut self, value: u32) {
        self.hunger = value.min(self.max_hunger);
    }

    pub fn set_thirst(&mut self, value: u32) {
        self.thirst = value.min(self.max_thirst);
    }

    pub fn hunger_status(&self) -> SurvivalStatus {
        SurvivalStatus::of_meter(self.hunger)
    }

    pub fn thirst_status(&self) -> SurvivalStatus {
        SurvivalStatus::of_meter(self.thirst)
    }

    pub fn temperature_status(&self) -> SurvivalStatus {
        let t = self.body_temperature;
        if !(32.0..=41.0).contains(&t) {
            SurvivalStatus::Dying
        } else if !(35.0..=39.0).contains(&t) {
            SurvivalStatus::Critical
        } else if !(36.0..=38.0).contains(&t) {
            SurvivalStatus::Warning
        } else {
            SurvivalStatus::Normal
        }
    }

    /// Advances every meter by one turn.
    ///
    /// # Arguments
    ///
    /// * `ambient` - Environment temperature in °C
    ///
    /// # Returns
    ///
    /// Messages for hunger or thirst crossing into a worse status.
    pub fn process_turn(&mut self, ambient: f32) -> SurvivalMessages {
        let mut messages = SurvivalMessages::new();

        let old = self.hunger_status();
        self.hunger = self.hunger.saturating_sub(Self::HUNGER_PER_TURN);
        let new = self.hunger_status();
        if new != old {
            match new {
                SurvivalStatus::Warning => messages.push("You are getting hungry."),
                SurvivalStatus::Critical => messages.push("You are ravenous!"),
                SurvivalStatus::Dying => messages.push("You are starving to death!"),
                SurvivalStatus::Normal => {}
            }
        }

        let old = self.thirst_status();
        self.thirst = self.thirst.saturating_sub(Self::THIRST_PER_TURN);
        let new = self.thirst_status();
        if new != old {
            match new {
                SurvivalStatus::Warning => messages.push("You are getting thirsty."),
                SurvivalStatus::Critical => messages.push("Your throat is parched!"),
                SurvivalStatus::Dying => messages.push("You are dying of thirst!"),
                SurvivalStatus::Normal => {}
            }
        }

        self.regulate_temperature(ambient);

        let regen = if self.resting {
            Self::STAMINA_RESTING
        } else {
            Self::STAMINA_ACTIVE
        };
        self.stamina = (self.stamina + regen).min(self.max_stamina);

        messages
    }

    fn regulate_temperature(&mut self, ambient: f32) {
        let diff = ambient - Self::COMFORTABLE_AMBIENT;
        let t = self.body_temperature;
        let next = if diff > 10.0 {
            t + Self::TEMPERATURE_SWING
        } else if diff < -10.0 {
            t - Self::TEMPERATURE_SWING
        } else if t > Self::NORMAL_TEMPERATURE {
            (t - Self::TEMPERATURE_RECOVERY).max(Self::NORMAL_TEMPERATURE)
        } else if t < Self::NORMAL_TEMPERATURE {
            (t + Self::TEMPERATURE_RECOVERY).min(Self::NORMAL_TEMPERATURE)
        } else {
            t
        };
        self.body_temperature = next.clamp(Self::MIN_TEMPERATURE, Self::MAX_TEMPERATURE);
    }

    /// Restores hunger and describes how full the actor now is.
    pub fn eat(&mut self, nutrition: u32) -> &'static str {
        let before = self.hunger;
        self.hunger = self.hunger.saturating_add(nutrition).min(self.max_hunger);
        if self.hunger == before {
            return "You can't eat any more.";
        }
        match fill_level(self.hunger, self.max_hunger) {
            Fill::Full => "You are full.",
            Fill::Half => "That hit the spot.",
            Fill::Low => "You ate a little.",
        }
    }

    /// Restores thirst and describes how quenched the actor now is.
    pub fn drink(&mut self, hydration: u32) -> &'static str {
        let before = self.thirst;
        self.thirst = self.thirst.saturating_add(hydration).min(self.max_thirst);
        if self.thirst == before {
            return "You can't drink any more.";
        }
        match fill_level(self.thirst, self.max_thirst) {
            Fill::Full => "Your thirst is quenched.",
            Fill::Half => "You drank your fill.",
            Fill::Low => "You drank a little.",
        }
    }

    pub fn rest(&mut self) -> &'static str {
        self.resting = true;
        "You settle down to rest..."
    }

    pub fn stop_rest(&mut self) -> &'static str {
        self.resting = false;
        "You stop resting."
    }

    /// Short human-readable condition line, `"normal"` when nothing is wrong.
    pub fn status_summary(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        match self.hunger_status() {
            SurvivalStatus::Dying => parts.push("starving"),
            SurvivalStatus::Critical => parts.push("ravenous"),
            SurvivalStatus::Warning => parts.push("hungry"),
            SurvivalStatus::Normal => {}
        }
        match self.thirst_status() {
            SurvivalStatus::Dying => parts.push("dehydrated"),
            SurvivalStatus::Critical => parts.push("parched"),
            SurvivalStatus::Warning => parts.push("thirsty"),
            SurvivalStatus::Normal => {}
        }
        if self.body_temperature < 35.0 {
            parts.push("hypothermic");
        } else if self.body_temperature > 39.0 {
            parts.push("feverish");
        }
        if parts.is_empty() {
            "normal".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

impl Default for Survival {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MAX_HUNGER,
            Self::DEFAULT_MAX_THIRST,
            Self::DEFAULT_MAX_STAMINA,
        )
    }
}

enum Fill {
    Full,
    Half,
    Low,
}

// 80% and 50% of the meter, compared in integers.
fn fill_level(value: u32, max: u32) -> Fill {
    let scaled = u64::from(value) * 10;
    let max = u64::from(max);
    if scaled >= max * 8 {
        Fill::Full
    } else if scaled >= max * 5 {
        Fill::Half
    } else {
        Fill::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_lowers_hunger_by_one_and_thirst_by_two() {
        let mut survival = Survival::default();
        survival.process_turn(Survival::COMFORTABLE_AMBIENT);
        assert_eq!(survival.hunger(), 999);
        assert_eq!(survival.thirst(), 998);
    }

    #[test]
    fn crossing_a_threshold_reports_once() {
        let mut survival = Survival::default();
        survival.set_hunger(SurvivalStatus::WARNING_BELOW);
        let messages = survival.process_turn(20.0);
        assert_eq!(messages.as_slice(), ["You are getting hungry."]);
        let messages = survival.process_turn(20.0);
        assert!(messages.is_empty());
    }

    #[test]
    fn meters_floor_at_zero_and_flag_starvation() {
        let mut survival = Survival::default();
        survival.set_hunger(1);
        survival.set_thirst(1);
        let messages = survival.process_turn(20.0);
        assert!(survival.is_starving());
        assert!(survival.is_dehydrated());
        assert_eq!(messages.len(), 2);
        survival.process_turn(20.0);
        assert_eq!(survival.hunger(), 0);
    }

    #[test]
    fn cold_ambient_cools_and_mild_ambient_recovers() {
        let mut survival = Survival::default();
        survival.process_turn(5.0);
        assert!((survival.body_temperature() - 36.9).abs() < 1e-4);
        survival.process_turn(20.0);
        assert!((survival.body_temperature() - 36.95).abs() < 1e-4);
    }

    #[test]
    fn resting_regenerates_stamina_faster() {
        let mut survival = Survival::from_parts(1000, 1000, 100, 1000, 1000, 50, 37.0, false);
        survival.process_turn(20.0);
        assert_eq!(survival.stamina(), 51);
        survival.rest();
        survival.process_turn(20.0);
        assert_eq!(survival.stamina(), 56);
    }

    #[test]
    fn eating_reports_fill_level() {
        let mut survival = Survival::default();
        assert_eq!(survival.eat(10), "You can't eat any more.");
        survival.set_hunger(100);
        assert_eq!(survival.eat(200), "You ate a little.");
        assert_eq!(survival.eat(300), "That hit the spot.");
        assert_eq!(survival.eat(300), "You are full.");
    }

    #[test]
    fn temperature_bands() {
        let at = |t| Survival::from_parts(1, 1, 1, 1, 1, 1, t, false).temperature_status();
        assert_eq!(at(37.0), SurvivalStatus::Normal);
        assert_eq!(at(38.5), SurvivalStatus::Warning);
        assert_eq!(at(34.0), SurvivalStatus::Critical);
        assert_eq!(at(31.0), SurvivalStatus::Dying);
    }

    #[test]
    fn summary_lists_every_problem() {
        let survival = Survival::from_parts(1000, 1000, 100, 0, 120, 100, 34.0, false);
        assert_eq!(survival.status_summary(), "starving, thirsty, hypothermic");
        assert_eq!(Survival::default().status_summary(), "normal");
    }
}
