//! Headless host for the contagion simulation.
//!
//! Wires the engine to a fixed-rate loop thread and exposes the latest
//! snapshot to whoever consumes it (a renderer, a logger, a test).

pub mod cli;
pub mod console;
pub mod game_loop;
pub mod state;

pub use contagion_core as core;
