use nalgebra::{UnitQuaternion, Vector3};
use tracing::{debug, trace};

use crate::{
    components::{FlightConfig, FlightIntent, PhaseTransition, PlaneState, StepResult},
    utils::{clamp, compose_orientation, forward_direction, lerp, GROUNDED_VERTICAL_VELOCITY},
};

/// Advance one airframe by `delta` seconds.
///
/// Pure and total: a negative `delta` integrates as zero and the commanded
/// speed is clamped into `[0, max_flight_speed]`. Orientation is recomposed
/// from the integrated pitch and yaw on every call.
pub fn step(
    state: &PlaneState,
    intent: &FlightIntent,
    delta: f64,
    config: &FlightConfig,
) -> StepResult {
    debug_assert!(
        config.min_flight_speed >= 0.0 && config.min_flight_speed < config.max_flight_speed,
        "flight config requires 0 <= min_flight_speed < max_flight_speed"
    );

    let dt = delta.max(0.0);

    let mut pitch = state.pitch + intent.pitch_input * config.pitch_speed * dt;
    let yaw = state.yaw + intent.turn_input * config.turn_speed * dt;
    let mut orientation = compose_orientation(pitch, yaw);

    let target_speed = clamp(intent.target_speed, 0.0, config.max_flight_speed);
    let forward_speed = clamp(
        lerp(state.forward_speed, target_speed, config.acceleration * dt),
        0.0,
        config.max_flight_speed,
    );

    let mut velocity = velocity_along(&orientation, forward_speed);
    let mut position = state.position + velocity * dt;

    let ground_y = config.ground_contact_altitude();
    let (phase, transition) = state.phase().transition(position.y <= ground_y);
    let grounded = phase.is_grounded();

    if let Some(edge) = transition {
        debug!(
            "Phase transition {:?} at ({:.3}, {:.3}, {:.3}), speed {:.3}",
            edge, position.x, position.y, position.z, forward_speed
        );
    }

    if transition == Some(PhaseTransition::Touchdown) {
        // Level the nose so a diving velocity does not survive the landing.
        pitch = 0.0;
        orientation = compose_orientation(pitch, yaw);
        velocity = velocity_along(&orientation, forward_speed);
    }

    if grounded {
        position.y = ground_y;
        velocity.y = GROUNDED_VERTICAL_VELOCITY;
    }

    let bank_target = if grounded {
        0.0
    } else {
        intent.turn_input * config.max_bank_radians
    };
    let bank_angle = lerp(state.bank_angle, bank_target, config.level_speed * dt);

    let next_state = PlaneState {
        position,
        orientation,
        yaw,
        pitch,
        forward_speed,
        target_speed,
        grounded,
        turn_input: intent.turn_input,
        pitch_input: intent.pitch_input,
        velocity,
        bank_angle,
    };

    trace!("Stepped dt={:.4}: {:?}", dt, next_state);

    StepResult {
        next_state,
        transition,
    }
}

fn velocity_along(orientation: &UnitQuaternion<f64>, speed: f64) -> Vector3<f64> {
    forward_direction(orientation) * speed
}
