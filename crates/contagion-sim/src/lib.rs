//! Simulation engine for the contagion model.
//!
//! Owns the hecs ECS world, runs systems one tick at a time,
//! and produces `SimulationSnapshot`s for a host.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use contagion_core as core;
pub use engine::SimulationEngine;
