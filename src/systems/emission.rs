use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    components::PlaneState,
    utils::{LEFT_WING_EDGE_LOCAL, RIGHT_WING_EDGE_LOCAL, TAIL_LOCAL},
};

/// World-space attachment points for trails and wingtip effects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionPoints {
    pub tail: Vector3<f64>,
    pub left_wing: Vector3<f64>,
    pub right_wing: Vector3<f64>,
}

/// Project the emission points for a body at `position` with `orientation`.
pub fn project_points(
    position: &Vector3<f64>,
    orientation: &UnitQuaternion<f64>,
) -> EmissionPoints {
    let place = |local: [f64; 3]| orientation * Vector3::from(local) + position;

    EmissionPoints {
        tail: place(TAIL_LOCAL),
        left_wing: place(LEFT_WING_EDGE_LOCAL),
        right_wing: place(RIGHT_WING_EDGE_LOCAL),
    }
}

/// Project the emission points through a full world transform.
///
/// Use this with [`visual_transform`] so the cosmetic bank moves the wingtips
/// without ever reaching the integrator.
pub fn project_points_from_transform(transform: &Isometry3<f64>) -> EmissionPoints {
    let place = |local: [f64; 3]| transform.transform_point(&Point3::from(local)).coords;

    EmissionPoints {
        tail: place(TAIL_LOCAL),
        left_wing: place(LEFT_WING_EDGE_LOCAL),
        right_wing: place(RIGHT_WING_EDGE_LOCAL),
    }
}

/// Rendered transform of an airframe: physical pose plus bank as a roll about body Z.
pub fn visual_transform(state: &PlaneState) -> Isometry3<f64> {
    let bank = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), state.bank_angle);
    Isometry3::from_parts(Translation3::from(state.position), state.orientation * bank)
}
