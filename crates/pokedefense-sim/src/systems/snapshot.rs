//! Snapshot system: queries the ECS world and builds a complete
//! `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use pokedefense_core::components::{Enemy, FieldUnit, Health};
use pokedefense_core::constants::{ENEMY_BASE_Y, PLAYER_BASE_Y};
use pokedefense_core::enums::GamePhase;
use pokedefense_core::events::GameEvent;
use pokedefense_core::state::*;
use pokedefense_core::types::{Position, SimTime};

use crate::player::PlayerState;
use crate::systems::wave_spawner::WaveQueue;

/// Build a complete snapshot from the current session state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    player: &PlayerState,
    hand: &[HandUnit],
    wave: &WaveQueue,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: player.view(),
        hand: hand.to_vec(),
        field: build_field(world),
        enemies: build_enemies(world),
        wave: wave.number,
        wave_remaining: wave.remaining(),
        game_over: phase.is_over(),
        victory: phase.is_victory(),
        player_base_y: PLAYER_BASE_Y,
        enemy_base_y: ENEMY_BASE_Y,
        events,
    }
}

fn build_field(world: &World) -> Vec<FieldUnitView> {
    let mut field: Vec<FieldUnitView> = world
        .query::<(&FieldUnit, &Position, &Health)>()
        .iter()
        .map(|(_, (unit, pos, health))| FieldUnitView {
            id: unit.id,
            name: unit.name.clone(),
            element: unit.element,
            position: *pos,
            health: health.current.max(0.0),
            max_health: health.max,
            attack: unit.attack,
            speed: unit.speed,
            attack_cooldown: unit.attack_cooldown,
            state: unit.state,
            target: unit.target,
        })
        .collect();

    field.sort_by_key(|u| u.id);
    field
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .map(|(_, (enemy, pos, health))| EnemyView {
            id: enemy.id,
            name: enemy.name.clone(),
            element: enemy.element,
            position: *pos,
            health: health.current.max(0.0),
            max_health: health.max,
            attack: enemy.attack,
            speed: enemy.speed,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}
