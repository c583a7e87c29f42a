use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    components::aircraft::config::{AircraftPreset, FlightConfig},
    utils::ConfigError,
};

/// Preset plus per-field overrides, as read from a config document.
///
/// ```yaml
/// preset: cargo
/// max_flight_speed: 25
/// ```
#[derive(Default, Debug, Serialize, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlightConfigBuilder {
    pub preset: Option<AircraftPreset>,
    pub min_flight_speed: Option<f64>,
    pub max_flight_speed: Option<f64>,
    pub turn_speed: Option<f64>,
    pub pitch_speed: Option<f64>,
    pub level_speed: Option<f64>,
    pub throttle_delta: Option<f64>,
    pub acceleration: Option<f64>,
    pub ground_height: Option<f64>,
    pub ground_clearance: Option<f64>,
    pub max_bank_radians: Option<f64>,
}

impl FlightConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preset(mut self, preset: AircraftPreset) -> Self {
        self.preset = Some(preset);
        self
    }

    pub fn speed_range(mut self, min: f64, max: f64) -> Self {
        self.min_flight_speed = Some(min);
        self.max_flight_speed = Some(max);
        self
    }

    pub fn turn_speed(mut self, rate: f64) -> Self {
        self.turn_speed = Some(rate);
        self
    }

    pub fn pitch_speed(mut self, rate: f64) -> Self {
        self.pitch_speed = Some(rate);
        self
    }

    pub fn level_speed(mut self, rate: f64) -> Self {
        self.level_speed = Some(rate);
        self
    }

    pub fn throttle_delta(mut self, delta: f64) -> Self {
        self.throttle_delta = Some(delta);
        self
    }

    pub fn acceleration(mut self, rate: f64) -> Self {
        self.acceleration = Some(rate);
        self
    }

    pub fn ground(mut self, height: f64, clearance: f64) -> Self {
        self.ground_height = Some(height);
        self.ground_clearance = Some(clearance);
        self
    }

    pub fn max_bank_radians(mut self, bank: f64) -> Self {
        self.max_bank_radians = Some(bank);
        self
    }

    pub fn build(self) -> Result<FlightConfig, ConfigError> {
        let preset = self.preset.unwrap_or_default();
        debug!("Building flight config from preset '{}'", preset);
        let mut config = preset.config();

        if let Some(v) = self.min_flight_speed {
            config.min_flight_speed = v;
        }
        if let Some(v) = self.max_flight_speed {
            config.max_flight_speed = v;
        }
        if let Some(v) = self.turn_speed {
            config.turn_speed = v;
        }
        if let Some(v) = self.pitch_speed {
            config.pitch_speed = v;
        }
        if let Some(v) = self.level_speed {
            config.level_speed = v;
        }
        if let Some(v) = self.throttle_delta {
            config.throttle_delta = v;
        }
        if let Some(v) = self.acceleration {
            config.acceleration = v;
        }
        if let Some(v) = self.ground_height {
            config.ground_height = v;
        }
        if let Some(v) = self.ground_clearance {
            config.ground_clearance = v;
        }
        if let Some(v) = self.max_bank_radians {
            config.max_bank_radians = v;
        }

        config.validate()?;
        Ok(config)
    }
}
