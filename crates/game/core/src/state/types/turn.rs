use crate::config::GameConfig;

/// Top-level mode of the session. Only `Playing` advances the simulation;
/// the pause states belong to the presentation layer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    #[default]
    Playing,
    PlayerDead,
    Inventory,
    Look,
    Targeting,
}

/// Coarse part of the day, used for flavour text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Turn counter and in-game calendar.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldClock {
    pub turn: u64,
    pub hour: u32,
    pub day: u32,
    pub ambient_temperature: f32,
}

/// What changed when the clock advanced one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTick {
    pub new_hour: bool,
    pub new_day: bool,
}

impl WorldClock {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            turn: 0,
            hour: config.start_hour,
            day: 1,
            ambient_temperature: config.ambient_temperature(config.start_hour),
        }
    }

    /// Advances one turn, rolling hours and days as needed.
    pub fn advance(&mut self, config: &GameConfig) -> ClockTick {
        let mut tick = ClockTick::default();
        self.turn += 1;
        if config.turns_per_hour > 0 && self.turn % u64::from(config.turns_per_hour) == 0 {
            tick.new_hour = true;
            self.hour += 1;
            if self.hour >= GameConfig::HOURS_PER_DAY {
                self.hour = 0;
                self.day += 1;
                tick.new_day = true;
            }
        }
        self.ambient_temperature = config.ambient_temperature(self.hour);
        tick
    }

    /// `"Day D, HH:00"`.
    pub fn time_string(&self) -> String {
        format!("Day {}, {:02}:00", self.day, self.hour)
    }

    pub fn period(&self) -> DayPeriod {
        match self.hour {
            6..12 => DayPeriod::Morning,
            12..18 => DayPeriod::Afternoon,
            18..21 => DayPeriod::Evening,
            _ => DayPeriod::Night,
        }
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_advances_every_configured_turns() {
        let config = GameConfig::default();
        let mut clock = WorldClock::new(&config);
        for _ in 0..59 {
            assert!(!clock.advance(&config).new_hour);
        }
        assert!(clock.advance(&config).new_hour);
        assert_eq!(clock.hour, 9);
        assert_eq!(clock.time_string(), "Day 1, 09:00");
    }

    #[test]
    fn midnight_rolls_into_next_day_and_cools() {
        let config = GameConfig {
            turns_per_hour: 1,
            start_hour: 23,
            ..GameConfig::default()
        };
        let mut clock = WorldClock::new(&config);
        let tick = clock.advance(&config);
        assert!(tick.new_day);
        assert_eq!((clock.day, clock.hour), (2, 0));
        assert_eq!(clock.ambient_temperature, config.night_temperature);
        assert_eq!(clock.period(), DayPeriod::Night);
    }

    #[test]
    fn periods_follow_the_hour() {
        let mut clock = WorldClock::default();
        assert_eq!(clock.period(), DayPeriod::Morning);
        clock.hour = 12;
        assert_eq!(clock.period(), DayPeriod::Afternoon);
        clock.hour = 20;
        assert_eq!(clock.period(), DayPeriod::Evening);
        clock.hour = 21;
        assert_eq!(clock.period(), DayPeriod::Night);
    }
}
