pub mod aircraft;
pub mod controller;
pub mod phase;

pub use aircraft::{
    AircraftPreset, FlightConfig, FlightConfigBuilder, FlightIntent, PlaneState, StepResult,
};
pub use controller::{any_pressed, KeyBindings, KeyCode, PressedKeys};
pub use phase::{FlightPhase, PhaseTransition};
