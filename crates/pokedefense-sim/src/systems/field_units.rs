//! Field-unit system: entrenched self-damage, targeting and attacks,
//! or marching on the enemy base line.
//!
//! Units are processed in placement order. An enemy killed by one unit
//! is despawned immediately, so later units cannot target it this tick.

use hecs::{Entity, World};
use tracing::{debug, info};

use pokedefense_core::components::{Enemy, FieldUnit, Health};
use pokedefense_core::constants::*;
use pokedefense_core::effectiveness;
use pokedefense_core::enums::{Element, UnitState};
use pokedefense_core::events::GameEvent;
use pokedefense_core::types::{EnemyId, Position, UnitId};

use crate::player::PlayerState;

/// An enemy as seen by the targeting logic.
#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub entity: Entity,
    pub id: EnemyId,
    pub position: Position,
    pub element: Element,
}

/// What a unit's turn asks the system to apply outside the unit itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitAction {
    Hold,
    /// Hit `targets[target]` for `damage`.
    Strike { target: usize, damage: f64 },
    /// Reached the enemy base line this turn.
    Entrenched,
    /// Health ran out while entrenched.
    Fallen,
}

/// Run one turn for every field unit.
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    wave_number: u32,
    dt: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let mut targets: Vec<Target> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| Target {
            entity,
            id: enemy.id,
            position: *pos,
            element: enemy.element,
        })
        .collect();
    targets.sort_by_key(|t| t.id);

    let mut units: Vec<(Entity, UnitId)> = world
        .query::<&FieldUnit>()
        .iter()
        .map(|(entity, unit)| (entity, unit.id))
        .collect();
    units.sort_by_key(|&(_, id)| id);

    for (entity, unit_id) in units {
        let action = match world.query_one_mut::<(&mut FieldUnit, &mut Position, &mut Health)>(entity) {
            Ok((unit, position, health)) => step_unit(unit, position, health, &targets, wave_number, dt),
            Err(_) => continue,
        };

        match action {
            UnitAction::Hold => {}
            UnitAction::Fallen => {
                info!(unit_id, "entrenched unit lost");
                despawn_buffer.push(entity);
                events.push(GameEvent::UnitLost { unit_id });
            }
            UnitAction::Entrenched => {
                player.award_entrenchment();
                info!(unit_id, score = player.score, "unit entrenched at enemy base");
                events.push(GameEvent::UnitEntrenched { unit_id });
            }
            UnitAction::Strike { target, damage } => {
                let enemy_entity = targets[target].entity;
                let killed = match world.get::<&mut Health>(enemy_entity) {
                    Ok(mut health) => {
                        health.current -= damage;
                        debug!(unit_id, enemy_id = targets[target].id, damage, remaining = health.current, "strike");
                        if health.current <= 0.0 {
                            health.current = 0.0;
                            true
                        } else {
                            false
                        }
                    }
                    Err(_) => false,
                };

                if killed {
                    let enemy = targets.remove(target);
                    let _ = world.despawn(enemy.entity);
                    events.push(GameEvent::EnemyDefeated {
                        enemy_id: enemy.id,
                        by_unit: unit_id,
                    });
                    if let Some(level_up) = player.award_kill() {
                        info!(level = level_up.level, reward_tokens = level_up.reward_tokens, "level up");
                        events.push(GameEvent::LevelUp {
                            level: level_up.level,
                            reward_tokens: level_up.reward_tokens,
                        });
                    }
                }
            }
        }
    }
}

/// Advance a single unit by `dt`. Mutates only the unit's own components;
/// effects on enemies and the player are returned as a `UnitAction`.
pub fn step_unit(
    unit: &mut FieldUnit,
    position: &mut Position,
    health: &mut Health,
    targets: &[Target],
    wave_number: u32,
    dt: f64,
) -> UnitAction {
    unit.attack_cooldown = (unit.attack_cooldown - dt).max(0.0);

    if unit.state == UnitState::Entrenched {
        unit.base_damage_timer += dt;
        if unit.base_damage_timer >= ENTRENCHED_DAMAGE_PERIOD_SECS {
            unit.base_damage_timer = 0.0;
            health.current -= wave_number as f64;
            if health.current <= 0.0 {
                health.current = 0.0;
                return UnitAction::Fallen;
            }
        }
        return UnitAction::Hold;
    }

    if let Some(index) = nearest_in_range(position, unit.attack_range, targets) {
        let target = &targets[index];
        unit.state = UnitState::Engaged;
        unit.target = Some(target.id);

        if unit.attack_cooldown > 0.0 {
            return UnitAction::Hold;
        }
        unit.attack_cooldown = ATTACK_COOLDOWN_SECS;
        let damage = unit.attack * effectiveness::multiplier(unit.element, target.element);
        return UnitAction::Strike {
            target: index,
            damage,
        };
    }

    unit.state = UnitState::Advancing;
    unit.target = None;

    let remaining = position.y - ENEMY_BASE_Y;
    let step = unit.speed * dt * UNIT_SPEED_SCALE;
    if remaining <= step {
        position.y = ENEMY_BASE_Y;
        unit.state = UnitState::Entrenched;
        unit.base_damage_timer = 0.0;
        return UnitAction::Entrenched;
    }
    position.y -= step;
    UnitAction::Hold
}

/// Index of the closest target strictly inside `range`. Ties keep the
/// earlier (lower id) target.
pub fn nearest_in_range(from: &Position, range: f64, targets: &[Target]) -> Option<usize> {
    let mut nearest = None;
    let mut nearest_distance = f64::INFINITY;
    for (index, target) in targets.iter().enumerate() {
        let distance = from.distance_to(&target.position);
        if distance < range && distance < nearest_distance {
            nearest = Some(index);
            nearest_distance = distance;
        }
    }
    nearest
}
