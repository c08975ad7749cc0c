//! Per-tick passes that operate on the simulation world.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; the engine passes in everything else.

pub mod cleanup;
pub mod field_units;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;
