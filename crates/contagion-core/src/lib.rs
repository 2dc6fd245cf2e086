//! Core types and definitions for the contagion simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, snapshots, events, statistics, and constants.
//! It has no dependency on the engine or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;

#[cfg(test)]
mod tests;
