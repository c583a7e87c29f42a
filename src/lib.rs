pub mod components;
pub mod server;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftPreset, FlightConfig, FlightConfigBuilder, FlightIntent, FlightPhase, KeyBindings,
    KeyCode, PhaseTransition, PlaneState, PressedKeys, StepResult,
};
pub use systems::{
    map_input, map_input_with, project_points, project_points_from_transform, step,
    visual_transform, Aircraft, EmissionPoints, Fleet,
};
pub use utils::{ConfigError, ReplayError};
