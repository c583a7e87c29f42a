use nalgebra::{UnitQuaternion, Vector3};

use crate::utils::constants::FORWARD_AXIS;

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f64::clamp` this does not panic when `min > max`; `min` wins.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}

/// Linear interpolation between two values
///
/// The blend factor is clamped to `[0, 1]`, so a factor past 1 lands exactly on `end`.
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Build an orientation from pitch and yaw with zero roll.
///
/// Rotation order is yaw about world Y, then pitch about the yawed X axis.
pub fn compose_orientation(pitch: f64, yaw: f64) -> UnitQuaternion<f64> {
    let yaw_rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw);
    let pitch_rotation = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), pitch);
    yaw_rotation * pitch_rotation
}

/// World-space heading of a body with the given orientation.
pub fn forward_direction(orientation: &UnitQuaternion<f64>) -> Vector3<f64> {
    (orientation * Vector3::from(FORWARD_AXIS)).normalize()
}
