//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Epidemic state of a single agent. Exactly one at a time.
///
/// Transitions: Susceptible -> Infected -> Recovered | Dead.
/// Recovered and Dead are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthState {
    #[default]
    Susceptible,
    Infected,
    Recovered,
    Dead,
}

impl HealthState {
    /// Display color for this state.
    pub fn color(self) -> [u8; 3] {
        match self {
            HealthState::Susceptible => COLOR_SUSCEPTIBLE,
            HealthState::Infected => COLOR_INFECTED,
            HealthState::Recovered => COLOR_RECOVERED,
            HealthState::Dead => COLOR_DEAD,
        }
    }

    /// Whether no further transition can leave this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, HealthState::Recovered | HealthState::Dead)
    }
}

/// Whether the epidemic can still change state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpidemicPhase {
    /// At least one agent is infected.
    #[default]
    Spreading,
    /// No infected agents remain. Survivors keep moving, but no state can change.
    BurnedOut,
}
