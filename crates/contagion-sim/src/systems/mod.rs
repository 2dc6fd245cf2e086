//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or in engine buffers.

pub mod cleanup;
pub mod contact;
pub mod movement;
pub mod outcome;
pub mod snapshot;
pub mod transitions;
