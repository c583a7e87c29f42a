/// Local-space heading of every airframe (negative Z is forward).
pub const FORWARD_AXIS: [f64; 3] = [0.0, 0.0, -1.0];

/// Forward speed above which turn keys register (m/s).
pub const MIN_TURN_SPEED: f64 = 0.5;

/// Vertical velocity reported while resting on the ground (m/s).
pub const GROUNDED_VERTICAL_VELOCITY: f64 = -1.0;

// Emission offsets in the airframe's local space
pub const TAIL_LOCAL: [f64; 3] = [0.0, 0.0, 1.15];
pub const LEFT_WING_EDGE_LOCAL: [f64; 3] = [-1.2, 0.03, 0.0];
pub const RIGHT_WING_EDGE_LOCAL: [f64; 3] = [1.2, 0.03, 0.0];
