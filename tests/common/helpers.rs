use arcade_flyer::{
    map_input, step, FlightConfig, FlightIntent, KeyCode, PlaneState, PressedKeys, StepResult,
};
use nalgebra::Vector3;

/// Builds a pressed-key set from a slice of codes
pub fn keys(codes: &[KeyCode]) -> PressedKeys {
    codes.iter().copied().collect()
}

/// Creates an airborne state at `altitude` holding `speed`, level and heading -Z
pub fn create_airborne_state(config: &FlightConfig, altitude: f64, speed: f64) -> PlaneState {
    let mut state = PlaneState::initial(config);
    state.grounded = false;
    state.position = Vector3::new(0.0, altitude, 0.0);
    state.forward_speed = speed;
    state.target_speed = speed;
    state
}

/// Creates a grounded state rolling at `speed`
pub fn create_grounded_state(config: &FlightConfig, speed: f64) -> PlaneState {
    let mut state = PlaneState::initial(config);
    state.forward_speed = speed;
    state.target_speed = speed;
    state
}

/// Intent holding the current speed with no stick input
pub fn hold_speed(speed: f64) -> FlightIntent {
    FlightIntent {
        target_speed: speed,
        turn_input: 0.0,
        pitch_input: 0.0,
    }
}

/// Map and step one frame the way a host loop does
pub fn run_frame(
    state: &PlaneState,
    codes: &[KeyCode],
    delta: f64,
    config: &FlightConfig,
) -> StepResult {
    let intent = map_input(&keys(codes), state, delta, config);
    step(state, &intent, delta, config)
}

/// Runs `frames` frames with the same keys held, returning every result
pub fn simulate(
    state: PlaneState,
    codes: &[KeyCode],
    frames: usize,
    delta: f64,
    config: &FlightConfig,
) -> Vec<StepResult> {
    let mut current = state;
    let mut results = Vec::with_capacity(frames);
    for _ in 0..frames {
        let result = run_frame(&current, codes, delta, config);
        current = result.next_state;
        results.push(result);
    }
    results
}
