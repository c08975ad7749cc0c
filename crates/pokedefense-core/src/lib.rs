//! Core types and definitions for the pokedefense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, catalogs, commands, state snapshots, events, errors and
//! constants. It has no dependency on any runtime or transport.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod effectiveness;
pub mod enums;
pub mod errors;
pub mod events;
pub mod state;
pub mod types;
