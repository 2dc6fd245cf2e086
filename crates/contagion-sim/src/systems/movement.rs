//! Kinematic integration system.
//!
//! Each tick: position += velocity, reflect at the domain edges, collapse
//! overspeed velocities to unit length, then add Brownian jitter.

use hecs::World;
use rand::Rng;

use contagion_core::components::Brownian;
use contagion_core::constants::{JITTER_AMPLITUDE, MAX_SPEED};
use contagion_core::types::{Position, Velocity};

/// Run motion integration for every live agent.
pub fn run<R: Rng>(world: &mut World, rng: &mut R, width: f64, height: f64) {
    for (_entity, (pos, vel, brownian)) in
        world.query_mut::<(&mut Position, &mut Velocity, Option<&Brownian>)>()
    {
        advance(pos, vel, width, height, brownian.is_some(), rng);
    }
}

/// Advance a single agent by one tick.
///
/// Reflection flips the velocity component only; the position is left where it
/// landed, so it may sit outside the box until the next tick carries it back.
pub fn advance<R: Rng>(
    pos: &mut Position,
    vel: &mut Velocity,
    width: f64,
    height: f64,
    jitter: bool,
    rng: &mut R,
) {
    pos.x += vel.x;
    pos.y += vel.y;

    if pos.x < 0.0 || pos.x > width {
        vel.x = -vel.x;
    }
    if pos.y < 0.0 || pos.y > height {
        vel.y = -vel.y;
    }

    // Collapse to 1.0, not to MAX_SPEED.
    if vel.speed() > MAX_SPEED {
        *vel = vel.normalized();
    }

    if jitter {
        vel.x += rng.gen_range(-JITTER_AMPLITUDE..=JITTER_AMPLITUDE);
        vel.y += rng.gen_range(-JITTER_AMPLITUDE..=JITTER_AMPLITUDE);
    }
}
