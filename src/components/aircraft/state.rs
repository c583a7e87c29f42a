use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::{
    components::{
        aircraft::config::FlightConfig,
        phase::{FlightPhase, PhaseTransition},
    },
    utils::compose_orientation,
};

/// Kinematic state of one arcade airframe.
///
/// Each step hands back a fresh value; the caller keeps the previous one if it
/// wants replay or undo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneState {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Always `compose_orientation(pitch, yaw)`; never integrated on its own.
    pub orientation: UnitQuaternion<f64>,
    pub yaw: f64,
    pub pitch: f64,
    /// Current speed along the forward axis [m/s]
    pub forward_speed: f64,
    /// Throttle-commanded speed that `forward_speed` eases toward [m/s]
    pub target_speed: f64,
    pub grounded: bool,
    /// Last applied turn intent in `[-1, 1]`
    pub turn_input: f64,
    /// Last applied pitch intent in `[-1, 1]`
    pub pitch_input: f64,
    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,
    /// Cosmetic roll angle [rad]
    pub bank_angle: f64,
}

impl PlaneState {
    /// Spawn state: level, stationary and resting on the ground.
    pub fn initial(config: &FlightConfig) -> Self {
        Self {
            position: Vector3::new(0.0, config.ground_contact_altitude(), 0.0),
            orientation: compose_orientation(0.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            forward_speed: 0.0,
            target_speed: 0.0,
            grounded: true,
            turn_input: 0.0,
            pitch_input: 0.0,
            velocity: Vector3::zeros(),
            bank_angle: 0.0,
        }
    }

    /// Copy of this state with new canonical angles and a matching orientation.
    pub fn with_angles(mut self, pitch: f64, yaw: f64) -> Self {
        self.pitch = pitch;
        self.yaw = yaw;
        self.orientation = compose_orientation(pitch, yaw);
        self
    }

    pub fn phase(&self) -> FlightPhase {
        FlightPhase::from_contact(self.grounded)
    }
}

/// Normalized per-frame pilot intent produced by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightIntent {
    pub target_speed: f64,
    pub turn_input: f64,
    pub pitch_input: f64,
}

/// Output of a single integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub next_state: PlaneState,
    /// Phase edge crossed during this step, if any.
    pub transition: Option<PhaseTransition>,
}

impl StepResult {
    pub fn position(&self) -> Vector3<f64> {
        self.next_state.position
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        self.next_state.orientation
    }

    pub fn forward_speed(&self) -> f64 {
        self.next_state.forward_speed
    }

    pub fn target_speed(&self) -> f64 {
        self.next_state.target_speed
    }

    pub fn grounded(&self) -> bool {
        self.next_state.grounded
    }

    pub fn bank_angle(&self) -> f64 {
        self.next_state.bank_angle
    }

    pub fn into_state(self) -> PlaneState {
        self.next_state
    }
}
