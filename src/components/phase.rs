use serde::{Deserialize, Serialize};

/// Ground-contact mode of an airframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightPhase {
    /// Resting on (or rolling along) the ground plane. Every airframe spawns here.
    #[default]
    Grounded,
    Airborne,
}

/// Edge between phases, reported on the step that crosses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseTransition {
    Liftoff,
    Touchdown,
}

impl FlightPhase {
    pub fn from_contact(contact: bool) -> Self {
        if contact {
            FlightPhase::Grounded
        } else {
            FlightPhase::Airborne
        }
    }

    pub fn is_grounded(&self) -> bool {
        matches!(self, FlightPhase::Grounded)
    }

    /// Advance the machine given whether the integrated altitude touches ground.
    pub fn transition(self, contact: bool) -> (FlightPhase, Option<PhaseTransition>) {
        match (self, contact) {
            (FlightPhase::Grounded, true) => (FlightPhase::Grounded, None),
            (FlightPhase::Grounded, false) => {
                (FlightPhase::Airborne, Some(PhaseTransition::Liftoff))
            }
            (FlightPhase::Airborne, true) => {
                (FlightPhase::Grounded, Some(PhaseTransition::Touchdown))
            }
            (FlightPhase::Airborne, false) => (FlightPhase::Airborne, None),
        }
    }
}
