//! Snapshot system: queries the ECS world and builds a `SimulationSnapshot`.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use contagion_core::components::{AgentId, Radius};
use contagion_core::enums::{EpidemicPhase, HealthState};
use contagion_core::events::SimEvent;
use contagion_core::state::{AgentView, SimulationSnapshot};
use contagion_core::stats::PopulationCounts;
use contagion_core::types::{Position, SimTime, Velocity};

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: EpidemicPhase,
    population: u32,
    events: Vec<SimEvent>,
) -> SimulationSnapshot {
    SimulationSnapshot {
        time: *time,
        phase,
        agents: build_agents(world),
        counts: count_population(world, population),
        events,
    }
}

/// Count live agents per state. Deaths are whatever is missing from `population`.
pub fn count_population(world: &World, population: u32) -> PopulationCounts {
    let (mut susceptible, mut infected, mut recovered) = (0u32, 0u32, 0u32);
    for (_, state) in world.query::<&HealthState>().iter() {
        match state {
            HealthState::Susceptible => susceptible += 1,
            HealthState::Infected => infected += 1,
            HealthState::Recovered => recovered += 1,
            HealthState::Dead => {}
        }
    }
    PopulationCounts::from_live(susceptible, infected, recovered, population)
}

/// Build the AgentView list, sorted by id.
fn build_agents(world: &World) -> Vec<AgentView> {
    let mut agents: Vec<AgentView> = world
        .query::<(&AgentId, &Position, &Velocity, &Radius, &HealthState)>()
        .iter()
        .filter(|(_, (_, _, _, _, state))| **state != HealthState::Dead)
        .map(|(_, (id, pos, vel, radius, state))| AgentView {
            id: *id,
            position: *pos,
            velocity: *vel,
            radius: radius.0,
            state: *state,
            color: state.color(),
        })
        .collect();

    agents.sort_by_key(|a| a.id);
    agents
}
