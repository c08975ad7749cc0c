//! Cleanup system: removes field units marked as fallen during the tick.

use hecs::{Entity, World};

/// Despawn everything collected in the buffer. The buffer is reused
/// across ticks to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
