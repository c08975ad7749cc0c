//! Player commands sent from the caller to a session.

use serde::{Deserialize, Serialize};

use crate::state::{GameStateSnapshot, HandUnit};
use crate::types::UnitId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Spend a reward token to draw a unit into the hand.
    OpenReward,
    /// Move a hand unit onto the placement lane at `x`.
    PlaceUnit { unit_id: UnitId, x: f64 },
}

/// Successful result of a dispatched command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandOutcome {
    Drawn { unit: HandUnit },
    Placed { snapshot: Box<GameStateSnapshot> },
}
