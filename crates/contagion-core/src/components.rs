//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Logic lives in systems. `Position`, `Velocity` (from `types`) and
//! `HealthState` (from `enums`) are used as components as well.

use serde::{Deserialize, Serialize};

/// Stable identity of an agent, assigned sequentially at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u32);

/// Collision radius. Two agents touch when their distance is below the sum of radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radius(pub f64);

/// Outcome clock, attached only while an agent is infected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Infection {
    /// Ticks left before the outcome resolves.
    pub ticks_remaining: u32,
    /// Chance that the outcome is death, in [0, 1].
    pub death_probability: f64,
}

/// Marks an agent whose velocity receives a random kick every tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brownian;
