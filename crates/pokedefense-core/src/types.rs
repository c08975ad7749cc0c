//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Identifier of a hand or field unit, unique within a session.
pub type UnitId = u32;

/// Identifier of a spawned enemy, unique within a session.
pub type EnemyId = u32;

/// Identity of the player that owns a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// 2D battlefield position.
/// x runs along the lanes, y grows from the enemy base (top) toward the
/// player's base (bottom).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of `advance` calls that ran the simulation.
    pub tick: u64,
    /// Accumulated simulated seconds (sum of all applied deltas).
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// True when `other` lies inside the axis-aligned separation box
    /// (strict on both axes) centred on this position.
    pub fn within_box(&self, other: &Position, half_width: f64, half_height: f64) -> bool {
        (self.x - other.x).abs() < half_width && (self.y - other.y).abs() < half_height
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds. `dt` must already be sanitized.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
