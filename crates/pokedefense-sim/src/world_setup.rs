//! Entity factories and catalog draws.
//!
//! Creates hand units from the catalogs and spawns field-unit and enemy
//! entities with their component bundles.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pokedefense_core::catalog::{EnemySpec, REWARD_CATALOG, STARTER_CATALOG};
use pokedefense_core::components::{Enemy, FieldUnit, Health};
use pokedefense_core::constants::*;
use pokedefense_core::enums::UnitState;
use pokedefense_core::state::HandUnit;
use pokedefense_core::types::{EnemyId, Position, UnitId};

/// Hand out the next session-unique unit id.
pub fn allocate_unit_id(next_unit_id: &mut UnitId) -> UnitId {
    let id = *next_unit_id;
    *next_unit_id += 1;
    id
}

/// Sample the opening hand from the starter catalog without replacement.
pub fn draw_starting_hand(rng: &mut ChaCha8Rng, next_unit_id: &mut UnitId) -> Vec<HandUnit> {
    STARTER_CATALOG
        .choose_multiple(rng, STARTING_HAND_SIZE)
        .map(|template| HandUnit::from_template(allocate_unit_id(next_unit_id), template))
        .collect()
}

/// Draw one unit uniformly from the reward catalog.
pub fn draw_reward(rng: &mut ChaCha8Rng, next_unit_id: &mut UnitId) -> HandUnit {
    let template = &REWARD_CATALOG[rng.gen_range(0..REWARD_CATALOG.len())];
    HandUnit::from_template(allocate_unit_id(next_unit_id), template)
}

/// Spawn a hand unit onto the placement lane at `x` with full health.
pub fn spawn_field_unit(world: &mut World, unit: HandUnit, x: f64) -> hecs::Entity {
    let health = unit.health as f64;
    world.spawn((
        FieldUnit {
            id: unit.id,
            name: unit.name,
            element: unit.element,
            attack: unit.attack as f64,
            speed: unit.speed,
            attack_range: ATTACK_RANGE,
            attack_cooldown: 0.0,
            state: UnitState::Idle,
            target: None,
            base_damage_timer: 0.0,
        },
        Position::new(x, PLACEMENT_LANE_Y),
        Health {
            current: health,
            max: health,
        },
    ))
}

/// Spawn an enemy at a given position with full health.
pub fn spawn_enemy(world: &mut World, spec: &EnemySpec, id: EnemyId, position: Position) -> hecs::Entity {
    let health = spec.health as f64;
    world.spawn((
        Enemy {
            id,
            name: spec.name.to_string(),
            element: spec.element,
            attack: spec.attack as f64,
            speed: spec.speed,
        },
        position,
        Health {
            current: health,
            max: health,
        },
    ))
}
