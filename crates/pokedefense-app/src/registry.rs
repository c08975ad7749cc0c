//! Active sessions keyed by player.
//!
//! Each session sits behind its own `Mutex`, so operations on one session
//! are serialized while different players proceed independently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::info;

use pokedefense_core::state::ResultSummary;
use pokedefense_core::types::PlayerId;
use pokedefense_sim::{SimConfig, SimulationEngine};

use crate::recorder::ResultRecorder;

pub type SharedSession = Arc<Mutex<SimulationEngine>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no active session for {0}")]
    SessionNotFound(PlayerId),
    #[error("session lock poisoned")]
    LockPoisoned,
}

#[derive(Default)]
pub struct SessionRegistry {
    base_config: SimConfig,
    sessions: Mutex<HashMap<PlayerId, SharedSession>>,
}

impl SessionRegistry {
    pub fn new(base_config: SimConfig) -> Self {
        Self {
            base_config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Start a fresh session for `player`, replacing any existing one.
    /// The seed is offset by the player id so players get different games.
    pub fn create(&self, player: PlayerId) -> Result<SharedSession, RegistryError> {
        let config = SimConfig {
            seed: self.base_config.seed.wrapping_add(player.0),
            ..self.base_config.clone()
        };
        let session = Arc::new(Mutex::new(SimulationEngine::new(player, config)));

        let replaced = self
            .sessions
            .lock()
            .map_err(|_| RegistryError::LockPoisoned)?
            .insert(player, session.clone());
        if replaced.is_some() {
            info!(%player, "replaced existing session");
        }
        Ok(session)
    }

    pub fn lookup(&self, player: PlayerId) -> Result<SharedSession, RegistryError> {
        self.sessions
            .lock()
            .map_err(|_| RegistryError::LockPoisoned)?
            .get(&player)
            .cloned()
            .ok_or(RegistryError::SessionNotFound(player))
    }

    /// Run `f` with exclusive access to the player's engine.
    pub fn with_session<T>(
        &self,
        player: PlayerId,
        f: impl FnOnce(&mut SimulationEngine) -> T,
    ) -> Result<T, RegistryError> {
        let session = self.lookup(player)?;
        let mut engine = session.lock().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(f(&mut engine))
    }

    /// Drop the player's session without recording a result.
    pub fn remove(&self, player: PlayerId) -> Result<SharedSession, RegistryError> {
        self.sessions
            .lock()
            .map_err(|_| RegistryError::LockPoisoned)?
            .remove(&player)
            .ok_or(RegistryError::SessionNotFound(player))
    }

    /// Finalize the player's session: compute the summary, hand it to the
    /// recorder and forget the session.
    pub fn end(&self, player: PlayerId, recorder: &dyn ResultRecorder) -> Result<ResultSummary, RegistryError> {
        let session = self.remove(player)?;
        let summary = match Arc::try_unwrap(session) {
            Ok(engine) => engine.into_inner().map_err(|_| RegistryError::LockPoisoned)?.end_session(),
            // Another handle is still alive; summarize through the lock.
            Err(shared) => shared.lock().map_err(|_| RegistryError::LockPoisoned)?.summary(),
        };
        recorder.record(&summary);
        Ok(summary)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|sessions| sessions.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
