//! State shared between the caller and the game loop thread.

use std::sync::{Arc, Mutex};

use pokedefense_core::commands::PlayerCommand;
use pokedefense_core::state::GameStateSnapshot;

use crate::registry::RegistryError;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the session.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Why the game loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopExit {
    Shutdown,
    Disconnected,
    GameOver,
    TickLimit,
    /// The session vanished from the registry or its lock was poisoned.
    SessionLost(RegistryError),
}

/// Latest snapshot, updated by the game loop thread after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
