//! Simulation snapshot: the complete visible state handed to a host after each step.

use serde::{Deserialize, Serialize};

use crate::components::AgentId;
use crate::enums::{EpidemicPhase, HealthState};
use crate::events::SimEvent;
use crate::stats::PopulationCounts;
use crate::types::{Position, SimTime, Velocity};

/// Read-only view of the simulation after a fully resolved tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub time: SimTime,
    pub phase: EpidemicPhase,
    /// Live agents, sorted by id.
    pub agents: Vec<AgentView>,
    pub counts: PopulationCounts,
    /// Transitions since the previous drained snapshot.
    pub events: Vec<SimEvent>,
}

/// A live agent as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
    pub state: HealthState,
    /// RGB display color for `state`.
    pub color: [u8; 3],
}

impl SimulationSnapshot {
    /// Look up a live agent by id.
    pub fn agent(&self, id: AgentId) -> Option<&AgentView> {
        self.agents
            .binary_search_by_key(&id, |a| a.id)
            .ok()
            .map(|idx| &self.agents[idx])
    }

    /// Ids of live agents in the given state, ascending.
    pub fn ids_in(&self, state: HealthState) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|a| a.state == state)
            .map(|a| a.id)
            .collect()
    }
}
