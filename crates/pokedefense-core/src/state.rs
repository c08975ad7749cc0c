//! Game state snapshot: the complete visible state handed to the caller
//! after every operation, plus the terminal result summary.

use serde::{Deserialize, Serialize};

use crate::catalog::UnitTemplate;
use crate::enums::{Element, GamePhase, UnitState};
use crate::events::GameEvent;
use crate::types::{EnemyId, PlayerId, Position, SimTime, UnitId};

/// Complete session state at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub hand: Vec<HandUnit>,
    pub field: Vec<FieldUnitView>,
    pub enemies: Vec<EnemyView>,
    pub wave: u32,
    /// Enemies still queued in the current wave.
    pub wave_remaining: u32,
    pub game_over: bool,
    pub victory: bool,
    pub player_base_y: f64,
    pub enemy_base_y: f64,
    pub events: Vec<GameEvent>,
}

/// Player resources and progression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub health: u32,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub reward_tokens: u32,
    pub score: u32,
    pub currency: u32,
}

/// A unit owned by the player but not yet placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandUnit {
    pub id: UnitId,
    pub name: String,
    pub element: Element,
    pub health: u32,
    pub attack: u32,
    pub speed: f64,
}

impl HandUnit {
    pub fn from_template(id: UnitId, template: &UnitTemplate) -> Self {
        Self {
            id,
            name: template.name.to_string(),
            element: template.element,
            health: template.health,
            attack: template.attack,
            speed: template.speed,
        }
    }
}

/// A placed unit for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldUnitView {
    pub id: UnitId,
    pub name: String,
    pub element: Element,
    pub position: Position,
    /// Clamped to zero.
    pub health: f64,
    pub max_health: f64,
    pub attack: f64,
    pub speed: f64,
    pub attack_cooldown: f64,
    pub state: UnitState,
    pub target: Option<EnemyId>,
}

/// A live enemy for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub name: String,
    pub element: Element,
    pub position: Position,
    /// Clamped to zero.
    pub health: f64,
    pub max_health: f64,
    pub attack: f64,
    pub speed: f64,
}

/// Immutable terminal summary handed to the result recorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub player_id: PlayerId,
    pub victory: bool,
    pub score: u32,
    /// In-game currency plus wave-completion and victory bonuses.
    pub currency_earned: u32,
    pub waves_completed: u32,
    /// Units in hand plus units on the field at the end.
    pub units_acquired: u32,
    /// Derived from score as `score / SCORE_PER_KILL`.
    pub enemies_defeated: u32,
    /// Wall-clock seconds since the session was created.
    pub duration_secs: f64,
    /// Simulated seconds accumulated through `advance`.
    pub sim_elapsed_secs: f64,
}
