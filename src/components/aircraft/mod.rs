pub mod config;
pub mod state;

pub use config::{AircraftPreset, FlightConfig, FlightConfigBuilder};
pub use state::{FlightIntent, PlaneState, StepResult};
