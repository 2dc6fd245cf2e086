//! Agent spawn factories for populating the simulation world.

use hecs::{Entity, EntityBuilder, World};
use rand::Rng;

use contagion_core::components::*;
use contagion_core::config::SimConfig;
use contagion_core::constants::INITIAL_SPEED_RANGE;
use contagion_core::enums::HealthState;
use contagion_core::types::{Position, Velocity};

/// Spawn the initial population: susceptible agents first, then infected ones.
///
/// Every initially infected agent starts with a fresh outcome clock.
pub fn spawn_population<R: Rng>(
    world: &mut World,
    rng: &mut R,
    config: &SimConfig,
    next_id: &mut u32,
) {
    for _ in 0..config.n_susceptible {
        let (position, velocity) = random_kinematics(rng, config.width, config.height);
        spawn_agent(
            world,
            next_id,
            HealthState::Susceptible,
            position,
            velocity,
            config,
        );
    }
    for _ in 0..config.n_infected {
        let (position, velocity) = random_kinematics(rng, config.width, config.height);
        spawn_agent(
            world,
            next_id,
            HealthState::Infected,
            position,
            velocity,
            config,
        );
    }
}

/// Spawn one agent with the next id. Infected agents get an outcome clock.
pub fn spawn_agent(
    world: &mut World,
    next_id: &mut u32,
    state: HealthState,
    position: Position,
    velocity: Velocity,
    config: &SimConfig,
) -> Entity {
    let id = AgentId(*next_id);
    *next_id += 1;

    let mut builder = EntityBuilder::new();
    builder
        .add(id)
        .add(state)
        .add(position)
        .add(velocity)
        .add(Radius(config.radius));
    if config.jitter {
        builder.add(Brownian);
    }
    if state == HealthState::Infected {
        builder.add(Infection {
            ticks_remaining: config.cycle_to_fate,
            death_probability: config.mortality_rate,
        });
    }
    world.spawn(builder.build())
}

/// Uniform position inside the domain and velocity in [-1, 1) per component.
fn random_kinematics<R: Rng>(rng: &mut R, width: f64, height: f64) -> (Position, Velocity) {
    let position = Position::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height));
    let velocity = Velocity::new(
        rng.gen_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE),
        rng.gen_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE),
    );
    (position, velocity)
}
