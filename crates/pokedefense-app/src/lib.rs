//! Pokedefense host application.
//!
//! Wires the simulation engine into a runnable process: a session registry
//! keyed by player, a result recorder, a background game loop thread that
//! paces the engine, and a simple autopilot that plays the session.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod recorder;
pub mod registry;
pub mod state;

pub use pokedefense_core as core;
