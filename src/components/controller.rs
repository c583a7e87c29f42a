use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

use crate::utils::ConfigError;

/// Polled input identifiers the host reports as held this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    KeyA,
    KeyD,
    KeyW,
    KeyS,
}

impl KeyCode {
    pub const ALL: [KeyCode; 8] = [
        KeyCode::ShiftLeft,
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::KeyA,
        KeyCode::KeyD,
        KeyCode::KeyW,
        KeyCode::KeyS,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KeyCode::ShiftLeft => "ShiftLeft",
            KeyCode::ShiftRight => "ShiftRight",
            KeyCode::ControlLeft => "ControlLeft",
            KeyCode::ControlRight => "ControlRight",
            KeyCode::KeyA => "KeyA",
            KeyCode::KeyD => "KeyD",
            KeyCode::KeyW => "KeyW",
            KeyCode::KeyS => "KeyS",
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyCode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyCode::ALL
            .into_iter()
            .find(|code| code.name() == s)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

/// Set of keys currently held, polled once per frame.
pub type PressedKeys = HashSet<KeyCode>;

/// Maps each flight action onto the keys that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub throttle_up: Vec<KeyCode>,
    pub throttle_down: Vec<KeyCode>,
    pub turn_left: Vec<KeyCode>,
    pub turn_right: Vec<KeyCode>,
    pub pitch_down: Vec<KeyCode>,
    pub pitch_up: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            throttle_up: vec![KeyCode::ShiftLeft, KeyCode::ShiftRight],
            throttle_down: vec![KeyCode::ControlLeft, KeyCode::ControlRight],
            turn_left: vec![KeyCode::KeyA],
            turn_right: vec![KeyCode::KeyD],
            pitch_down: vec![KeyCode::KeyW],
            pitch_up: vec![KeyCode::KeyS],
        }
    }
}

/// True when any of `codes` is held.
pub fn any_pressed(keys: &PressedKeys, codes: &[KeyCode]) -> bool {
    codes.iter().any(|code| keys.contains(code))
}
