//! Events emitted by the simulation for UI feedback and logging.
//!
//! The engine buffers events as they happen; each snapshot drains them.

use serde::{Deserialize, Serialize};

use crate::types::{EnemyId, UnitId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A reward token was spent.
    UnitDrawn { unit_id: UnitId, name: String },
    UnitPlaced { unit_id: UnitId, x: f64 },
    EnemySpawned { enemy_id: EnemyId, name: String, x: f64 },
    /// An enemy reached the player's base line.
    BaseBreached {
        enemy_id: EnemyId,
        damage: u32,
        remaining_health: u32,
    },
    EnemyDefeated { enemy_id: EnemyId, by_unit: UnitId },
    LevelUp { level: u32, reward_tokens: u32 },
    /// The previous wave's queue drained and a new one was generated.
    WaveAdvanced { wave: u32, queued: u32 },
    UnitEntrenched { unit_id: UnitId },
    /// An entrenched unit ran out of health.
    UnitLost { unit_id: UnitId },
    GameOver { victory: bool },
}
