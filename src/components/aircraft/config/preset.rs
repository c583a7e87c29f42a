use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{components::aircraft::config::FlightConfig, utils::ConfigError};

/// Named airframe archetypes. Presets only change numbers, never behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftPreset {
    #[default]
    Default,
    LightFighter,
    Cargo,
    Stunt,
    Glider,
}

impl AircraftPreset {
    pub const ALL: [AircraftPreset; 5] = [
        AircraftPreset::Default,
        AircraftPreset::LightFighter,
        AircraftPreset::Cargo,
        AircraftPreset::Stunt,
        AircraftPreset::Glider,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AircraftPreset::Default => "default",
            AircraftPreset::LightFighter => "light_fighter",
            AircraftPreset::Cargo => "cargo",
            AircraftPreset::Stunt => "stunt",
            AircraftPreset::Glider => "glider",
        }
    }

    pub fn config(&self) -> FlightConfig {
        let base = FlightConfig::default();
        match self {
            AircraftPreset::Default => base,
            AircraftPreset::LightFighter => FlightConfig {
                min_flight_speed: 15.0,
                max_flight_speed: 45.0,
                turn_speed: 1.2,
                pitch_speed: 0.8,
                acceleration: 10.0,
                max_bank_radians: 1.0,
                ..base
            },
            AircraftPreset::Cargo => FlightConfig {
                min_flight_speed: 8.0,
                max_flight_speed: 22.0,
                turn_speed: 0.4,
                pitch_speed: 0.3,
                acceleration: 3.0,
                max_bank_radians: 0.5,
                ..base
            },
            AircraftPreset::Stunt => FlightConfig {
                min_flight_speed: 12.0,
                max_flight_speed: 35.0,
                turn_speed: 1.0,
                pitch_speed: 0.7,
                acceleration: 8.0,
                max_bank_radians: 1.2,
                ..base
            },
            AircraftPreset::Glider => FlightConfig {
                min_flight_speed: 5.0,
                max_flight_speed: 18.0,
                turn_speed: 0.5,
                pitch_speed: 0.4,
                acceleration: 2.0,
                max_bank_radians: 0.6,
                ..base
            },
        }
    }
}

impl fmt::Display for AircraftPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AircraftPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        AircraftPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == normalized)
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}
