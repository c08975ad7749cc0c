//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//! Field units and enemies both carry a `Position` and a `Health`.

use serde::{Deserialize, Serialize};

use crate::enums::{Element, UnitState};
use crate::types::{EnemyId, UnitId};

/// Hit points of a field unit or enemy. `current` may dip below zero
/// inside a tick; snapshots clamp it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// A unit the player has placed on the battlefield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldUnit {
    /// Same id the unit had in the hand.
    pub id: UnitId,
    pub name: String,
    pub element: Element,
    pub attack: f64,
    /// Catalog speed (unscaled).
    pub speed: f64,
    pub attack_range: f64,
    /// Seconds until the next attack is allowed.
    pub attack_cooldown: f64,
    pub state: UnitState,
    /// Enemy currently being engaged.
    pub target: Option<EnemyId>,
    /// Accumulates time while entrenched; drives self-damage.
    pub base_damage_timer: f64,
}

/// A hostile unit marching toward the player's base line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    pub element: Element,
    pub attack: f64,
    /// Units per second.
    pub speed: f64,
}
