//! Enemy movement: march toward the player's base line and breach it.

use hecs::{Entity, World};
use tracing::debug;

use pokedefense_core::components::Enemy;
use pokedefense_core::constants::{BASE_BREACH_DAMAGE, PLAYER_BASE_Y};
use pokedefense_core::events::GameEvent;
use pokedefense_core::types::{EnemyId, Position};

use crate::player::PlayerState;

/// Move every enemy by `speed * dt`. Enemies closer to the base line than
/// their step snap onto it, damage the player and are removed.
pub fn run(world: &mut World, player: &mut PlayerState, dt: f64, events: &mut Vec<GameEvent>) {
    let mut breached: Vec<(Entity, EnemyId)> = Vec::new();

    for (entity, (enemy, pos)) in world.query_mut::<(&Enemy, &mut Position)>() {
        let dy = PLAYER_BASE_Y - pos.y;
        let step = enemy.speed * dt;

        if dy.abs() < step {
            pos.y = PLAYER_BASE_Y;
            breached.push((entity, enemy.id));
        } else if dy > 0.0 {
            pos.y += step;
        } else {
            pos.y -= step;
        }
    }

    breached.sort_by_key(|&(_, id)| id);
    for (entity, enemy_id) in breached {
        let _ = world.despawn(entity);
        player.take_breach(BASE_BREACH_DAMAGE);
        debug!(enemy_id, remaining_health = player.health, "base breached");
        events.push(GameEvent::BaseBreached {
            enemy_id,
            damage: BASE_BREACH_DAMAGE,
            remaining_health: player.health,
        });
    }
}
