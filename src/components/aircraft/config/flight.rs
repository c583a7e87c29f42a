use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::warn;

use crate::{components::aircraft::config::FlightConfigBuilder, utils::ConfigError};

/// Tuning for one arcade airframe.
///
/// Callers must keep `0 <= min_flight_speed < max_flight_speed`; the flight
/// systems assume it and never check at runtime. Use [`FlightConfig::validate`]
/// or the builder when the numbers come from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightConfig {
    /// Lowest forward speed that sustains flight (m/s).
    pub min_flight_speed: f64,
    /// Forward speed ceiling (m/s).
    pub max_flight_speed: f64,
    /// Yaw rate at full turn input (rad/s).
    pub turn_speed: f64,
    /// Pitch rate at full pitch input (rad/s).
    pub pitch_speed: f64,
    /// Rate at which the visual bank converges on its target.
    pub level_speed: f64,
    /// Throttle authority (m/s per second held).
    pub throttle_delta: f64,
    /// Rate at which forward speed eases toward the throttle target.
    pub acceleration: f64,
    /// World Y of the ground plane (m).
    pub ground_height: f64,
    /// Resting altitude of the airframe above the ground plane (m).
    pub ground_clearance: f64,
    /// Largest cosmetic bank angle (radians).
    pub max_bank_radians: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            min_flight_speed: 10.0,
            max_flight_speed: 30.0,
            turn_speed: 0.75,
            pitch_speed: 0.5,
            level_speed: 3.0,
            throttle_delta: 30.0,
            acceleration: 6.0,
            ground_height: 0.0,
            ground_clearance: 0.35,
            max_bank_radians: 0.7,
        }
    }
}

impl FlightConfig {
    /// Altitude at which the airframe rests on the ground.
    #[inline]
    pub fn ground_contact_altitude(&self) -> f64 {
        self.ground_height + self.ground_clearance
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_flight_speed", self.min_flight_speed),
            ("max_flight_speed", self.max_flight_speed),
            ("turn_speed", self.turn_speed),
            ("pitch_speed", self.pitch_speed),
            ("level_speed", self.level_speed),
            ("throttle_delta", self.throttle_delta),
            ("acceleration", self.acceleration),
            ("ground_height", self.ground_height),
            ("ground_clearance", self.ground_clearance),
            ("max_bank_radians", self.max_bank_radians),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
            if name != "ground_height" && value < 0.0 {
                return Err(invalid(format!("{} must be non-negative, got {}", name, value)));
            }
        }

        if self.min_flight_speed >= self.max_flight_speed {
            return Err(invalid(format!(
                "min_flight_speed ({}) must be below max_flight_speed ({})",
                self.min_flight_speed, self.max_flight_speed
            )));
        }

        Ok(())
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let builder: FlightConfigBuilder = serde_yaml::from_str(source)?;
        builder.build()
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let builder: FlightConfigBuilder = serde_json::from_str(source)?;
        builder.build()
    }

    /// Load a config file; `.json` files parse as JSON, anything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }
}

fn invalid(message: String) -> ConfigError {
    warn!("Rejected flight config: {}", message);
    ConfigError::Validation(message)
}
