use rayon::prelude::*;
use std::collections::{btree_map::Entry, BTreeMap, HashMap};
use tracing::{debug, info};

use crate::{
    components::{FlightConfig, KeyBindings, PlaneState, PressedKeys, StepResult},
    systems::{controller::map_input_with, flight::step},
};

/// One simulated airframe with its own tuning and bindings.
#[derive(Debug, Clone)]
pub struct Aircraft {
    pub config: FlightConfig,
    pub bindings: KeyBindings,
    pub state: PlaneState,
}

impl Aircraft {
    pub fn new(config: FlightConfig) -> Self {
        Self {
            config,
            bindings: KeyBindings::default(),
            state: PlaneState::initial(&config),
        }
    }

    /// Map this frame's keys against the previous state, then integrate.
    pub fn advance(&mut self, keys: &PressedKeys, delta: f64) -> StepResult {
        let intent = map_input_with(&self.bindings, keys, &self.state, delta, &self.config);
        let result = step(&self.state, &intent, delta, &self.config);
        self.state = result.next_state;
        result
    }
}

/// Named collection of independent aircraft stepped together.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    aircraft: BTreeMap<String, Aircraft>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or respawn) an aircraft at its initial state.
    pub fn spawn(&mut self, name: impl Into<String>, config: FlightConfig) -> &mut Aircraft {
        match self.aircraft.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                debug!("Respawning aircraft '{}'", entry.key());
                entry.insert(Aircraft::new(config));
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                info!("Spawning aircraft '{}'", entry.key());
                entry.insert(Aircraft::new(config))
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Aircraft> {
        self.aircraft.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Aircraft> {
        self.aircraft.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Aircraft)> {
        self.aircraft.iter()
    }

    /// Step every aircraft in parallel. Aircraft missing from `inputs` see no keys.
    pub fn step_all(
        &mut self,
        inputs: &HashMap<String, PressedKeys>,
        delta: f64,
    ) -> BTreeMap<String, StepResult> {
        let idle = PressedKeys::new();

        self.aircraft
            .par_iter_mut()
            .map(|(name, aircraft)| {
                let keys = inputs.get(name).unwrap_or(&idle);
                (name.clone(), aircraft.advance(keys, delta))
            })
            .collect()
    }
}
