//! Simulation engine for pokedefense.
//!
//! Owns a hecs ECS world per session, runs the tick passes in order,
//! and produces `GameStateSnapshot`s for the caller. Completely headless
//! and driven only by caller-supplied deltas, enabling deterministic testing.

pub mod engine;
pub mod player;
pub mod summary;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use pokedefense_core as core;

#[cfg(test)]
mod tests;
