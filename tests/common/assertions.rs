use approx::assert_relative_eq;
use arcade_flyer::{utils::compose_orientation, FlightConfig, PlaneState};
use nalgebra::Vector3;

/// Assert that every numeric field of a plane state is finite
#[track_caller]
pub fn assert_state_valid(state: &PlaneState) {
    assert!(state.position.iter().all(|x| x.is_finite()), "Position is not finite");
    assert!(state.velocity.iter().all(|x| x.is_finite()), "Velocity is not finite");
    assert!(state.yaw.is_finite(), "Yaw is not finite");
    assert!(state.pitch.is_finite(), "Pitch is not finite");
    assert!(state.forward_speed.is_finite(), "Forward speed is not finite");
    assert!(state.bank_angle.is_finite(), "Bank angle is not finite");
}

/// Assert that the orientation is exactly the one composed from pitch and yaw
#[track_caller]
pub fn assert_orientation_canonical(state: &PlaneState) {
    assert_eq!(
        state.orientation,
        compose_orientation(state.pitch, state.yaw),
        "Orientation drifted from pitch/yaw"
    );
}

/// Assert the invariants every stepped state must hold under `config`
#[track_caller]
pub fn assert_state_invariants(state: &PlaneState, config: &FlightConfig) {
    assert_state_valid(state);
    assert_orientation_canonical(state);

    assert!(
        (0.0..=config.max_flight_speed).contains(&state.forward_speed),
        "Forward speed {} outside [0, {}]",
        state.forward_speed,
        config.max_flight_speed
    );
    assert!(
        (0.0..=config.max_flight_speed).contains(&state.target_speed),
        "Target speed {} outside [0, {}]",
        state.target_speed,
        config.max_flight_speed
    );

    if state.grounded {
        assert_eq!(
            state.position.y,
            config.ground_contact_altitude(),
            "Grounded state not pinned to ground"
        );
        assert_eq!(state.velocity.y, -1.0, "Grounded vertical velocity changed");
    } else {
        assert!(state.position.y > config.ground_contact_altitude());
    }
}

/// Assert that two positions are approximately equal
#[track_caller]
pub fn assert_position_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
