//! Epidemic state transitions: death, new infections, recovery.
//!
//! Transitions mutate the agent in place, so identity, position, and (apart
//! from the reversal on infection) velocity carry over.

use hecs::{Entity, World};
use tracing::warn;

use contagion_core::components::{AgentId, Infection};
use contagion_core::enums::HealthState;
use contagion_core::events::SimEvent;
use contagion_core::types::Velocity;

use crate::systems::contact;

/// Mark agents whose outcome was death. The cleanup system removes them.
pub fn kill(world: &mut World, deaths: &[Entity], events: &mut Vec<SimEvent>, tick: u64) {
    for &entity in deaths {
        if let Ok((id, state)) = world.query_one_mut::<(&AgentId, &mut HealthState)>(entity) {
            *state = HealthState::Dead;
            events.push(SimEvent::Died { id: *id, tick });
        }
    }
}

/// Infect every susceptible agent touching an infected one.
///
/// The new infection reverses the agent's velocity and starts a fresh
/// outcome clock. Returns the number of new infections.
pub fn infect(
    world: &mut World,
    cycle_to_fate: u32,
    mortality_rate: f64,
    events: &mut Vec<SimEvent>,
    tick: u64,
) -> usize {
    let susceptible = contact::bodies_in(world, HealthState::Susceptible);
    let infected = contact::bodies_in(world, HealthState::Infected);
    let contacts = contact::find_contacts(&susceptible, &infected);

    let mut infected_now = 0;
    for &entity in &contacts {
        let id = match world.query_one_mut::<(&AgentId, &mut HealthState, &mut Velocity)>(entity)
        {
            Ok((id, state, vel)) => {
                *state = HealthState::Infected;
                *vel = vel.reversed();
                *id
            }
            Err(_) => continue,
        };
        let clock = Infection {
            ticks_remaining: cycle_to_fate,
            death_probability: mortality_rate,
        };
        if let Err(err) = world.insert_one(entity, clock) {
            warn!(agent = id.0, %err, "Failed to attach infection clock");
            continue;
        }
        events.push(SimEvent::Infected { id, tick });
        infected_now += 1;
    }

    infected_now
}

/// Move agents whose outcome was recovery into the recovered state.
pub fn recover(
    world: &mut World,
    recoveries: &[Entity],
    events: &mut Vec<SimEvent>,
    tick: u64,
) {
    for &entity in recoveries {
        let id = match world.query_one_mut::<(&AgentId, &mut HealthState)>(entity) {
            Ok((id, state)) if *state == HealthState::Infected => {
                *state = HealthState::Recovered;
                *id
            }
            _ => continue,
        };
        if let Err(err) = world.remove_one::<Infection>(entity) {
            warn!(agent = id.0, %err, "Recovered agent had no infection clock");
        }
        events.push(SimEvent::Recovered { id, tick });
    }
}
