pub mod controller;
pub mod emission;
pub mod flight;
pub mod fleet;

pub use controller::{map_input, map_input_with};
pub use emission::{project_points, project_points_from_transform, visual_transform, EmissionPoints};
pub use flight::step;
pub use fleet::{Aircraft, Fleet};
