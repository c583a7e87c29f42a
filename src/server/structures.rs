use serde::{Deserialize, Serialize};

use crate::{
    components::{KeyCode, PhaseTransition, PlaneState},
    systems::EmissionPoints,
};

/// One line of a replay script: elapsed time plus the keys held that frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frame {
    pub delta: f64,
    #[serde(default)]
    pub keys: Vec<KeyCode>,
}

/// Emitted after each replayed frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub frame: usize,
    pub state: PlaneState,
    /// Emission points under the banked visual transform.
    pub emission: EmissionPoints,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<PhaseTransition>,
}
