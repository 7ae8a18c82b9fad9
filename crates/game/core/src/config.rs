/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Sight radius of the player, in cells (Euclidean).
    pub fov_radius: u32,
    /// Whether the opaque cell that stops a ray is itself revealed.
    pub light_walls: bool,
    /// Turns per in-game hour.
    pub turns_per_hour: u32,
    /// Hour of day a new session starts at.
    pub start_hour: u32,
    /// First hour (inclusive) with daytime ambient temperature.
    pub day_start_hour: u32,
    /// First hour (inclusive) with nighttime ambient temperature.
    pub night_start_hour: u32,
    pub day_temperature: f32,
    pub night_temperature: f32,
    /// Maximum number of entries kept in the message log.
    pub message_log_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Inventory slots are addressed by the letters a..=z.
    pub const MAX_INVENTORY_SLOTS: usize = 26;
    pub const HOURS_PER_DAY: u32 = 24;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOV_RADIUS: u32 = 10;
    pub const DEFAULT_TURNS_PER_HOUR: u32 = 60;
    pub const DEFAULT_START_HOUR: u32 = 8;
    pub const DEFAULT_DAY_START_HOUR: u32 = 6;
    pub const DEFAULT_NIGHT_START_HOUR: u32 = 20;
    pub const DEFAULT_DAY_TEMPERATURE: f32 = 22.0;
    pub const DEFAULT_NIGHT_TEMPERATURE: f32 = 15.0;
    pub const DEFAULT_MESSAGE_LOG_CAPACITY: usize = 100;

    pub fn new() -> Self {
        Self {
            fov_radius: Self::DEFAULT_FOV_RADIUS,
            light_walls: true,
            turns_per_hour: Self::DEFAULT_TURNS_PER_HOUR,
            start_hour: Self::DEFAULT_START_HOUR,
            day_start_hour: Self::DEFAULT_DAY_START_HOUR,
            night_start_hour: Self::DEFAULT_NIGHT_START_HOUR,
            day_temperature: Self::DEFAULT_DAY_TEMPERATURE,
            night_temperature: Self::DEFAULT_NIGHT_TEMPERATURE,
            message_log_capacity: Self::DEFAULT_MESSAGE_LOG_CAPACITY,
        }
    }

    pub fn with_fov_radius(fov_radius: u32) -> Self {
        Self {
            fov_radius,
            ..Self::new()
        }
    }

    /// Ambient temperature for the given hour of day.
    pub fn ambient_temperature(&self, hour: u32) -> f32 {
        if (self.day_start_hour..self.night_start_hour).contains(&hour) {
            self.day_temperature
        } else {
            self.night_temperature
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
