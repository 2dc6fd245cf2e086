//! Outcome clock system. Counts down infections and rolls death or recovery.

use hecs::{Entity, World};
use rand::Rng;

use contagion_core::components::Infection;
use contagion_core::enums::HealthState;

/// Agents whose outcome resolved this tick. Reused across ticks.
#[derive(Debug, Default)]
pub struct Outcomes {
    pub deaths: Vec<Entity>,
    pub recoveries: Vec<Entity>,
}

impl Outcomes {
    pub fn clear(&mut self) {
        self.deaths.clear();
        self.recoveries.clear();
    }
}

/// Decrement every infected agent's clock; resolve those that reach zero.
///
/// Each expired clock draws exactly one sample in [0, 1). The caller converts
/// the resolved agents before the next tick, which removes their `Infection`,
/// so a clock never fires twice.
pub fn run<R: Rng>(world: &mut World, rng: &mut R, outcomes: &mut Outcomes) {
    outcomes.clear();

    for (entity, (state, infection)) in world.query_mut::<(&HealthState, &mut Infection)>() {
        if *state != HealthState::Infected {
            continue;
        }

        infection.ticks_remaining = infection.ticks_remaining.saturating_sub(1);
        if infection.ticks_remaining > 0 {
            continue;
        }

        let roll: f64 = rng.gen();
        if roll < infection.death_probability {
            outcomes.deaths.push(entity);
        } else {
            outcomes.recoveries.push(entity);
        }
    }
}
