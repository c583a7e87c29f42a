use arcade_flyer::{map_input, FlightConfig, KeyCode, PlaneState};

use crate::common::{create_airborne_state, keys};

#[test]
fn test_throttle_up_saturates_at_max_speed() {
    let config = FlightConfig::default();
    let mut state = PlaneState::initial(&config);
    state.forward_speed = config.max_flight_speed - 1.0;

    let intent = map_input(&keys(&[KeyCode::ShiftLeft]), &state, 1.0, &config);
    assert_eq!(intent.target_speed, config.max_flight_speed);
}

#[test]
fn test_airborne_throttle_down_floors_at_min_speed() {
    let config = FlightConfig::default();
    let state = create_airborne_state(&config, 40.0, config.min_flight_speed + 2.0);

    let intent = map_input(&keys(&[KeyCode::ControlLeft]), &state, 1.0, &config);
    assert_eq!(intent.target_speed, config.min_flight_speed);
}

#[test]
fn test_grounded_throttle_down_reaches_zero() {
    let config = FlightConfig::default();
    let mut state = PlaneState::initial(&config);
    state.forward_speed = 6.0;

    let intent = map_input(&keys(&[KeyCode::ControlLeft]), &state, 1.0, &config);
    assert_eq!(intent.target_speed, 0.0);
}

#[test]
fn test_pitch_up_ignored_below_min_speed() {
    let config = FlightConfig::default();
    let state = create_airborne_state(&config, 40.0, config.min_flight_speed - 0.1);

    let intent = map_input(&keys(&[KeyCode::KeyS]), &state, 0.2, &config);
    assert_eq!(intent.pitch_input, 0.0);
}

#[test]
fn test_pitch_down_ignored_while_grounded() {
    let config = FlightConfig::default();
    let mut state = PlaneState::initial(&config);
    state.forward_speed = 20.0;

    let intent = map_input(&keys(&[KeyCode::KeyW]), &state, 0.2, &config);
    assert_eq!(intent.pitch_input, 0.0);
}

#[test]
fn test_ground_idle_cannot_spin() {
    let config = FlightConfig::default();
    let state = PlaneState::initial(&config);

    let intent = map_input(&keys(&[KeyCode::KeyA]), &state, 0.2, &config);
    assert_eq!(intent.turn_input, 0.0);
}

#[test]
fn test_mapping_is_pure() {
    let config = FlightConfig::default();
    let state = create_airborne_state(&config, 40.0, 18.0);
    let held = keys(&[KeyCode::ShiftRight, KeyCode::KeyD, KeyCode::KeyW]);

    let first = map_input(&held, &state, 0.05, &config);
    let second = map_input(&held, &state, 0.05, &config);
    assert_eq!(first, second);
    assert_eq!(first.turn_input, -1.0);
    assert_eq!(first.pitch_input, -1.0);
}
