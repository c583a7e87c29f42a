use crate::{
    components::{any_pressed, FlightConfig, FlightIntent, KeyBindings, PlaneState, PressedKeys},
    utils::{clamp, MIN_TURN_SPEED},
};

/// Translate held keys into a flight intent using the default bindings.
///
/// Must be called with the state from the previous frame, before it is stepped.
pub fn map_input(
    keys: &PressedKeys,
    state: &PlaneState,
    delta: f64,
    config: &FlightConfig,
) -> FlightIntent {
    map_input_with(&KeyBindings::default(), keys, state, delta, config)
}

/// Translate held keys into a flight intent with explicit bindings.
///
/// Throttle keys rebase the target on the current forward speed, so releasing
/// them holds whatever target was last commanded. Throttle-down is applied
/// after throttle-up and wins when both are held. Turn keys only register
/// once the airframe is rolling, nose-down is locked out on the ground and
/// nose-up is locked out below flight speed.
pub fn map_input_with(
    bindings: &KeyBindings,
    keys: &PressedKeys,
    state: &PlaneState,
    delta: f64,
    config: &FlightConfig,
) -> FlightIntent {
    let mut target_speed = state.target_speed;
    let throttle_step = config.throttle_delta * delta;

    if any_pressed(keys, &bindings.throttle_up) {
        target_speed = (state.forward_speed + throttle_step).min(config.max_flight_speed);
    }

    if any_pressed(keys, &bindings.throttle_down) {
        let floor = if state.grounded {
            0.0
        } else {
            config.min_flight_speed
        };
        target_speed = (state.forward_speed - throttle_step).max(floor);
    }

    let mut turn_input = 0.0;
    if state.forward_speed > MIN_TURN_SPEED {
        if any_pressed(keys, &bindings.turn_left) {
            turn_input += 1.0;
        }
        if any_pressed(keys, &bindings.turn_right) {
            turn_input -= 1.0;
        }
    }

    let mut pitch_input = 0.0;
    if !state.grounded && any_pressed(keys, &bindings.pitch_down) {
        pitch_input -= 1.0;
    }
    if state.forward_speed >= config.min_flight_speed && any_pressed(keys, &bindings.pitch_up) {
        pitch_input += 1.0;
    }

    FlightIntent {
        target_speed,
        turn_input: clamp(turn_input, -1.0, 1.0),
        pitch_input: clamp(pitch_input, -1.0, 1.0),
    }
}
