//! Engine-level error taxonomy. Every error is local and non-fatal:
//! the session is left exactly as it was before the failed operation.

use thiserror::Error;

use crate::types::UnitId;

/// Why a `place_unit` request was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("unit {0} is not in the hand")]
    UnitNotFound(UnitId),
    #[error("x = {x} is outside the playable range {min}..={max}")]
    OutOfBounds { x: f64, min: f64, max: f64 },
    #[error("x = {x} is too close to field unit {occupant}")]
    PositionOccupied { x: f64, occupant: UnitId },
}

/// Why an `open_reward` request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardError {
    #[error("no reward tokens left")]
    InsufficientTokens,
    /// Benign: the session is frozen and nothing changed.
    #[error("session is already over")]
    SessionAlreadyOver,
}

/// Error from dispatching a `PlayerCommand`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Reward(#[from] RewardError),
}
