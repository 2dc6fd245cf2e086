//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::components::AgentId;

/// A state transition that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A susceptible agent made contact with an infected one.
    Infected { id: AgentId, tick: u64 },
    /// An infected agent's outcome resolved to recovery.
    Recovered { id: AgentId, tick: u64 },
    /// An infected agent's outcome resolved to death; it was removed.
    Died { id: AgentId, tick: u64 },
}

impl SimEvent {
    pub fn id(&self) -> AgentId {
        match *self {
            SimEvent::Infected { id, .. }
            | SimEvent::Recovered { id, .. }
            | SimEvent::Died { id, .. } => id,
        }
    }
}
