mod builder;
mod flight;
mod preset;

pub use builder::FlightConfigBuilder;
pub use flight::FlightConfig;
pub use preset::AircraftPreset;
