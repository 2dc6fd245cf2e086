//! Cleanup system: removes dead agents from the world.

use hecs::{Entity, World};

use contagion_core::enums::HealthState;

/// Despawn every agent in the Dead state. Returns how many were removed.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> u32 {
    despawn_buffer.clear();

    for (entity, state) in world.query_mut::<&HealthState>() {
        if *state == HealthState::Dead {
            despawn_buffer.push(entity);
        }
    }

    let mut removed = 0;
    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            removed += 1;
        }
    }
    removed
}
