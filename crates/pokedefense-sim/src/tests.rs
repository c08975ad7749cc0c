//! Tests for the session engine: determinism, waves, combat, placement,
//! rewards and the end-of-session summary.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use pokedefense_core::catalog::{EnemySpec, REWARD_CATALOG};
use pokedefense_core::commands::{CommandOutcome, PlayerCommand};
use pokedefense_core::constants::*;
use pokedefense_core::enums::*;
use pokedefense_core::errors::{CommandError, PlacementError, RewardError};
use pokedefense_core::events::GameEvent;
use pokedefense_core::state::HandUnit;
use pokedefense_core::types::{PlayerId, Position};

use crate::engine::{SimConfig, SimulationEngine};

/// No enemies spawn on their own; tests place them by hand.
fn quiet_engine() -> SimulationEngine {
    SimulationEngine::new(
        PlayerId(1),
        SimConfig {
            spawn_interval_secs: f64::INFINITY,
            ..Default::default()
        },
    )
}

fn hand_unit(name: &str, element: Element, health: u32, attack: u32, speed: f64) -> HandUnit {
    HandUnit {
        id: 0,
        name: name.to_string(),
        element,
        health,
        attack,
        speed,
    }
}

fn dummy(element: Element, health: u32, speed: f64) -> EnemySpec {
    EnemySpec {
        name: "Dummy",
        element,
        health,
        attack: 5,
        speed,
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = SimulationEngine::new(PlayerId(1), config.clone());
    let mut engine_b = SimulationEngine::new(PlayerId(1), config);

    let first = engine_a.hand()[0].id;
    engine_a.place_unit(first, 300.0).unwrap();
    engine_b.place_unit(first, 300.0).unwrap();

    for _ in 0..200 {
        let snap_a = engine_a.advance(0.25);
        let snap_b = engine_b.advance(0.25);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(
        PlayerId(1),
        SimConfig {
            seed: 111,
            ..Default::default()
        },
    );
    let mut engine_b = SimulationEngine::new(
        PlayerId(1),
        SimConfig {
            seed: 222,
            ..Default::default()
        },
    );

    // Spawn x positions are drawn from the RNG, so a handful of spawns
    // is enough to tell the two sessions apart.
    let mut diverged = false;
    for _ in 0..4 {
        let snap_a = engine_a.advance(SPAWN_INTERVAL_SECS);
        let snap_b = engine_b.advance(SPAWN_INTERVAL_SECS);
        if serde_json::to_string(&snap_a).unwrap() != serde_json::to_string(&snap_b).unwrap() {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce different sessions");
}

// ---- Session start ----

#[test]
fn test_new_session_starting_state() {
    let mut engine = SimulationEngine::new_session(PlayerId(9));
    assert_eq!(engine.player_id(), PlayerId(9));
    assert_eq!(engine.phase(), GamePhase::Active);
    assert_eq!(engine.wave().number, 1);
    assert_eq!(engine.wave().remaining(), 4);
    let snap = engine.snapshot();

    assert_eq!(snap.player.health, STARTING_HEALTH);
    assert_eq!(snap.player.level, 1);
    assert_eq!(snap.player.experience, 0);
    assert_eq!(snap.player.experience_to_next, STARTING_EXP_THRESHOLD);
    assert_eq!(snap.player.reward_tokens, STARTING_REWARD_TOKENS);
    assert_eq!(snap.hand.len(), STARTING_HAND_SIZE);
    assert_ne!(snap.hand[0].name, snap.hand[1].name, "Starting hand draws without replacement");
    assert!(snap.field.is_empty());
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.wave_remaining, 4);
    assert_eq!(snap.phase, GamePhase::Active);
    assert!(!snap.game_over);
    assert!(!snap.victory);
    assert_eq!(snap.player_base_y, PLAYER_BASE_Y);
    assert_eq!(snap.enemy_base_y, ENEMY_BASE_Y);
    assert_eq!(snap.time.tick, 0);
}

// ---- Waves ----

#[test]
fn test_spawn_waits_for_interval() {
    let mut engine = SimulationEngine::new_session(PlayerId(1));
    let snap = engine.advance(1.0);
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.wave_remaining, 4);

    let snap = engine.advance(0.5);
    assert_eq!(snap.enemies.len(), 1);
    assert_eq!(snap.wave_remaining, 3);
    let enemy = &snap.enemies[0];
    assert!((FIELD_MIN_X..=FIELD_MAX_X).contains(&enemy.position.x));
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemySpawned { enemy_id: 1, .. })));
}

#[test]
fn test_at_most_one_spawn_per_advance() {
    let mut engine = SimulationEngine::new_session(PlayerId(1));
    let snap = engine.advance(SPAWN_INTERVAL_SECS * 10.0);
    let spawned = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemySpawned { .. }))
        .count();
    assert_eq!(spawned, 1);
    assert_eq!(snap.wave_remaining, 3);
}

#[test]
fn test_wave_advances_after_last_spawn() {
    let mut engine = SimulationEngine::new_session(PlayerId(1));
    for _ in 0..3 {
        engine.advance(SPAWN_INTERVAL_SECS);
    }
    let snap = engine.advance(SPAWN_INTERVAL_SECS);
    assert_eq!(snap.wave, 2);
    assert_eq!(snap.wave_remaining, 5);
    assert!(snap
        .events
        .iter()
        .any(|e| *e == GameEvent::WaveAdvanced { wave: 2, queued: 5 }));
}

// ---- Combat ----

#[test]
fn test_super_effective_kill_awards_rewards() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Squirtle", Element::Water, 70, 10, 1.8));
    engine.place_unit(unit_id, 400.0).unwrap();
    let enemy_id = engine.spawn_test_enemy(&dummy(Element::Fire, 15, 0.0), Position::new(400.0, 350.0));

    let snap = engine.advance(0.0);

    assert!(snap.enemies.is_empty(), "20 damage should kill a 15 hp enemy");
    assert_eq!(snap.player.score, SCORE_PER_KILL);
    assert_eq!(snap.player.experience, EXP_PER_KILL);
    assert_eq!(snap.player.currency, CURRENCY_PER_KILL);
    assert!(snap.events.iter().any(|e| *e
        == GameEvent::EnemyDefeated {
            enemy_id,
            by_unit: unit_id,
        }));
    let unit = &snap.field[0];
    assert_eq!(unit.state, UnitState::Engaged);
    assert_eq!(unit.attack_cooldown, ATTACK_COOLDOWN_SECS);
}

#[test]
fn test_resisted_damage_and_cooldown() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Squirtle", Element::Water, 70, 10, 1.8));
    engine.place_unit(unit_id, 400.0).unwrap();
    let enemy_id = engine.spawn_test_enemy(&dummy(Element::Grass, 30, 0.0), Position::new(400.0, 350.0));

    let snap = engine.advance(0.0);
    assert_eq!(snap.enemies[0].health, 25.0);
    assert_eq!(snap.field[0].target, Some(enemy_id));

    // Cooldown 0.8 -> 0.3: no attack yet.
    let snap = engine.advance(0.5);
    assert_eq!(snap.enemies[0].health, 25.0);

    // Cooldown reaches zero this tick and the unit strikes again.
    let snap = engine.advance(0.5);
    assert_eq!(snap.enemies[0].health, 20.0);
}

#[test]
fn test_immune_matchup_spends_attack() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Pikachu", Element::Electric, 45, 18, 2.5));
    engine.place_unit(unit_id, 400.0).unwrap();
    engine.spawn_test_enemy(&dummy(Element::Ground, 30, 0.0), Position::new(400.0, 350.0));

    let snap = engine.advance(0.0);
    assert_eq!(snap.enemies[0].health, 30.0);
    assert_eq!(snap.field[0].attack_cooldown, ATTACK_COOLDOWN_SECS);
    assert_eq!(snap.field[0].state, UnitState::Engaged);
}

#[test]
fn test_unit_targets_nearest_enemy() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Squirtle", Element::Water, 70, 10, 1.8));
    engine.place_unit(unit_id, 400.0).unwrap();
    engine.spawn_test_enemy(&dummy(Element::Normal, 50, 0.0), Position::new(400.0, 300.0));
    let near = engine.spawn_test_enemy(&dummy(Element::Normal, 50, 0.0), Position::new(400.0, 340.0));

    let snap = engine.advance(0.0);
    assert_eq!(snap.field[0].target, Some(near));
    let hit = snap.enemies.iter().find(|e| e.id == near).unwrap();
    assert_eq!(hit.health, 40.0);
}

#[test]
fn test_enemy_out_of_range_is_ignored() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Squirtle", Element::Water, 70, 10, 1.8));
    engine.place_unit(unit_id, 400.0).unwrap();
    // Exactly ATTACK_RANGE away: the range check is strict.
    engine.spawn_test_enemy(&dummy(Element::Normal, 50, 0.0), Position::new(400.0, 400.0 - ATTACK_RANGE));

    let snap = engine.advance(0.0);
    assert_eq!(snap.enemies[0].health, 50.0);
    assert_eq!(snap.field[0].state, UnitState::Advancing);
    assert_eq!(snap.field[0].target, None);
}

#[test]
fn test_fifty_kills_level_up() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Squirtle", Element::Water, 70, 10, 1.8));
    engine.place_unit(unit_id, 400.0).unwrap();

    // One enemy in range per tick; a 1s tick always clears the 0.8s cooldown.
    for kill in 1..50u32 {
        engine.spawn_test_enemy(&dummy(Element::Normal, 1, 0.0), Position::new(400.0, 350.0));
        let snap = engine.advance(1.0);
        assert!(snap.enemies.is_empty(), "enemy {kill} survived");
        assert_eq!(snap.player.level, 1);
        assert_eq!(snap.player.experience, kill * EXP_PER_KILL);
    }

    engine.spawn_test_enemy(&dummy(Element::Normal, 1, 0.0), Position::new(400.0, 350.0));
    let snap = engine.advance(1.0);
    assert!(snap.enemies.is_empty());

    assert_eq!(snap.player.level, 2);
    assert_eq!(snap.player.experience, 0);
    assert_eq!(snap.player.experience_to_next, 120);
    assert_eq!(snap.player.reward_tokens, STARTING_REWARD_TOKENS + LEVEL_UP_REWARD_TOKENS);
    assert_eq!(snap.player.score, 50 * SCORE_PER_KILL);
    assert!(snap.events.contains(&GameEvent::LevelUp {
        level: 2,
        reward_tokens: STARTING_REWARD_TOKENS + LEVEL_UP_REWARD_TOKENS,
    }));
}

// ---- Entrenchment ----

#[test]
fn test_unit_entrenches_at_enemy_base() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Squirtle", Element::Water, 70, 10, 1.8));
    engine.place_unit(unit_id, 400.0).unwrap();

    // 1.8 * 30 = 54 per second, 300 to travel.
    let snap = engine.advance(1.0);
    assert_eq!(snap.field[0].state, UnitState::Advancing);
    assert!((snap.field[0].position.y - 346.0).abs() < 1e-9);

    let snap = engine.advance(10.0);
    let unit = &snap.field[0];
    assert_eq!(unit.state, UnitState::Entrenched);
    assert_eq!(unit.position.y, ENEMY_BASE_Y);
    assert_eq!(snap.player.score, ENTRENCH_SCORE_BONUS);
    assert_eq!(snap.player.currency, ENTRENCH_CURRENCY_BONUS);
    assert!(snap
        .events
        .iter()
        .any(|e| *e == GameEvent::UnitEntrenched { unit_id }));
}

#[test]
fn test_entrenched_unit_wears_down_and_is_lost() {
    let mut engine = quiet_engine();
    let unit_id = engine.insert_hand_unit(hand_unit("Fragile", Element::Normal, 3, 10, 100.0));
    engine.place_unit(unit_id, 400.0).unwrap();

    let snap = engine.advance(1.0);
    assert_eq!(snap.field[0].state, UnitState::Entrenched);
    assert_eq!(snap.field[0].health, 3.0);

    // Wave 1: one point of damage per full second entrenched.
    let snap = engine.advance(1.0);
    assert_eq!(snap.field[0].health, 2.0);
    let snap = engine.advance(0.5);
    assert_eq!(snap.field[0].health, 2.0);
    let snap = engine.advance(0.5);
    assert_eq!(snap.field[0].health, 1.0);

    let snap = engine.advance(1.0);
    assert!(snap.field.is_empty());
    assert!(snap.events.iter().any(|e| *e == GameEvent::UnitLost { unit_id }));
    // Entrenchment rewards are kept.
    assert_eq!(snap.player.score, ENTRENCH_SCORE_BONUS);
}

// ---- Base breach, defeat and victory ----

#[test]
fn test_breach_damages_player() {
    let mut engine = quiet_engine();
    let enemy_id = engine.spawn_test_enemy(&dummy(Element::Normal, 30, 100.0), Position::new(300.0, 420.0));

    let snap = engine.advance(1.0);
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.player.health, STARTING_HEALTH - BASE_BREACH_DAMAGE);
    assert!(snap.events.iter().any(|e| *e
        == GameEvent::BaseBreached {
            enemy_id,
            damage: BASE_BREACH_DAMAGE,
            remaining_health: 80,
        }));
    assert!(!snap.game_over);
}

#[test]
fn test_defeat_freezes_session() {
    let mut engine = quiet_engine();
    for i in 0..5 {
        engine.spawn_test_enemy(&dummy(Element::Normal, 30, 10.0), Position::new(100.0 + 100.0 * i as f64, 449.0));
    }

    let snap = engine.advance(1.0);
    assert_eq!(snap.player.health, 0);
    assert_eq!(snap.phase, GamePhase::Defeat);
    assert!(snap.game_over);
    assert!(!snap.victory);
    assert!(snap.events.contains(&GameEvent::GameOver { victory: false }));
    assert_eq!(engine.phase(), GamePhase::Defeat);

    let hand_before = snap.hand.clone();
    let frozen = engine.advance(5.0);
    assert_eq!(frozen.time, snap.time);
    assert_eq!(frozen.player, snap.player);
    assert!(frozen.events.is_empty());

    let unit_id = hand_before[0].id;
    let placed = engine.place_unit(unit_id, 400.0).unwrap();
    assert_eq!(placed.hand, hand_before);
    assert!(placed.field.is_empty());

    assert_eq!(engine.open_reward(), Err(RewardError::SessionAlreadyOver));
}

#[test]
fn test_victory_after_configured_waves() {
    let mut engine = SimulationEngine::new(
        PlayerId(3),
        SimConfig {
            seed: 5,
            victory_wave: 1,
            spawn_interval_secs: 0.0,
        },
    );

    // Zero-length ticks spawn one enemy each without moving anything.
    let mut snap = engine.snapshot();
    for _ in 0..4 {
        assert!(!snap.game_over);
        snap = engine.advance(0.0);
    }
    assert_eq!(snap.wave, 2);
    assert_eq!(snap.phase, GamePhase::Victory);
    assert!(snap.game_over);
    assert!(snap.victory);
    assert_eq!(snap.player.health, STARTING_HEALTH);

    let summary = engine.end_session();
    assert!(summary.victory);
    assert_eq!(summary.waves_completed, 1);
    assert_eq!(summary.currency_earned, WAVE_COMPLETION_BONUS + VICTORY_BONUS);
}

#[test]
fn test_defeat_takes_precedence_over_victory() {
    let mut engine = SimulationEngine::new(
        PlayerId(3),
        SimConfig {
            victory_wave: 0,
            spawn_interval_secs: f64::INFINITY,
            ..Default::default()
        },
    );
    for i in 0..5 {
        engine.spawn_test_enemy(&dummy(Element::Normal, 30, 10.0), Position::new(100.0 + 100.0 * i as f64, 449.0));
    }

    let snap = engine.advance(1.0);
    assert_eq!(snap.phase, GamePhase::Defeat);
    assert!(!snap.victory);
    let game_overs = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::GameOver { .. }))
        .count();
    assert_eq!(game_overs, 1);
}

// ---- Placement ----

#[test]
fn test_place_unit_moves_hand_to_field() {
    let mut engine = quiet_engine();
    let unit = engine.hand()[0].clone();

    let snap = engine.place_unit(unit.id, 400.0).unwrap();
    assert_eq!(snap.hand.len(), 1);
    assert_eq!(snap.field.len(), 1);
    let placed = &snap.field[0];
    assert_eq!(placed.id, unit.id);
    assert_eq!(placed.name, unit.name);
    assert_eq!(placed.position, Position::new(400.0, PLACEMENT_LANE_Y));
    assert_eq!(placed.health, unit.health as f64);
    assert_eq!(placed.state, UnitState::Idle);
    assert!(snap.events.contains(&GameEvent::UnitPlaced { unit_id: unit.id, x: 400.0 }));
}

#[test]
fn test_place_unit_rejections_leave_state_unchanged() {
    let mut engine = quiet_engine();
    let first = engine.hand()[0].id;
    let second = engine.hand()[1].id;

    assert_eq!(engine.place_unit(999, 400.0), Err(PlacementError::UnitNotFound(999)));
    assert_eq!(
        engine.place_unit(first, 10.0),
        Err(PlacementError::OutOfBounds {
            x: 10.0,
            min: FIELD_MIN_X,
            max: FIELD_MAX_X,
        })
    );
    assert!(matches!(engine.place_unit(first, 750.5), Err(PlacementError::OutOfBounds { .. })));
    assert_eq!(engine.hand().len(), 2);
    assert_eq!(engine.field_count(), 0);

    engine.place_unit(first, 400.0).unwrap();
    assert_eq!(
        engine.place_unit(second, 479.0),
        Err(PlacementError::PositionOccupied {
            x: 479.0,
            occupant: first,
        })
    );
    assert_eq!(engine.hand().len(), 1);
    assert_eq!(engine.field_count(), 1);

    // Exactly MIN_SEPARATION_X away is allowed.
    engine.place_unit(second, 480.0).unwrap();
    assert_eq!(engine.field_count(), 2);
}

#[test]
fn test_place_unit_at_field_edges() {
    let mut engine = quiet_engine();
    let first = engine.hand()[0].id;
    let second = engine.hand()[1].id;
    engine.place_unit(first, FIELD_MIN_X).unwrap();
    engine.place_unit(second, FIELD_MAX_X).unwrap();
    assert_eq!(engine.field_count(), 2);
}

#[test]
fn test_advanced_unit_no_longer_blocks_lane() {
    let mut engine = quiet_engine();
    let first = engine.hand()[0].id;
    let second = engine.hand()[1].id;
    engine.place_unit(first, 400.0).unwrap();
    // Slowest starter covers 96 in two seconds, clearing the separation box.
    engine.advance(2.0);
    engine.place_unit(second, 400.0).unwrap();
    assert_eq!(engine.field_count(), 2);
}

// ---- Rewards ----

#[test]
fn test_open_reward_spends_tokens() {
    let mut engine = quiet_engine();
    let mut drawn_ids = HashSet::new();

    for remaining in (0..STARTING_REWARD_TOKENS).rev() {
        let unit = engine.open_reward().unwrap();
        assert!(REWARD_CATALOG.iter().any(|t| t.name == unit.name));
        assert!(drawn_ids.insert(unit.id));
        assert_eq!(engine.player().reward_tokens, remaining);
    }
    assert_eq!(engine.open_reward(), Err(RewardError::InsufficientTokens));
    assert_eq!(engine.hand().len(), STARTING_HAND_SIZE + STARTING_REWARD_TOKENS as usize);

    let snap = engine.snapshot();
    let drawn = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::UnitDrawn { .. }))
        .count();
    assert_eq!(drawn, STARTING_REWARD_TOKENS as usize);
}

// ---- Commands ----

#[test]
fn test_apply_dispatches_commands() {
    let mut engine = quiet_engine();
    let unit_id = engine.hand()[0].id;

    match engine.apply(PlayerCommand::PlaceUnit { unit_id, x: 400.0 }).unwrap() {
        CommandOutcome::Placed { snapshot } => assert_eq!(snapshot.field.len(), 1),
        other => panic!("unexpected outcome {other:?}"),
    }
    match engine.apply(PlayerCommand::OpenReward).unwrap() {
        CommandOutcome::Drawn { unit } => assert!(engine.hand().contains(&unit)),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(
        engine.apply(PlayerCommand::PlaceUnit { unit_id, x: 400.0 }).unwrap_err(),
        CommandError::Placement(PlacementError::UnitNotFound(unit_id))
    );
}

// ---- Clock ----

#[test]
fn test_invalid_delta_is_ignored() {
    let mut engine = quiet_engine();
    engine.spawn_test_enemy(&dummy(Element::Normal, 30, 50.0), Position::new(300.0, ENEMY_BASE_Y));

    for dt in [-1.0, f64::NAN, f64::INFINITY] {
        let snap = engine.advance(dt);
        assert_eq!(snap.time.elapsed_secs, 0.0);
        assert_eq!(snap.enemies[0].position.y, ENEMY_BASE_Y);
    }
}

#[test]
fn test_events_drain_into_one_snapshot() {
    let mut engine = quiet_engine();
    engine.open_reward().unwrap();
    assert!(!engine.snapshot().events.is_empty());
    assert!(engine.snapshot().events.is_empty());
}

// ---- Summary ----

#[test]
fn test_end_session_on_fresh_session() {
    let engine = SimulationEngine::new_session(PlayerId(4));
    let summary = engine.end_session();
    assert_eq!(summary.player_id, PlayerId(4));
    assert!(!summary.victory);
    assert_eq!(summary.score, 0);
    assert_eq!(summary.currency_earned, 0);
    assert_eq!(summary.waves_completed, 0);
    assert_eq!(summary.units_acquired, 2);
    assert_eq!(summary.enemies_defeated, 0);
    assert_eq!(summary.sim_elapsed_secs, 0.0);
}

// ---- Invariant sweep ----

#[test]
fn test_random_sessions_hold_invariants() {
    for seed in 0..20u64 {
        let mut engine = SimulationEngine::new(
            PlayerId(seed),
            SimConfig {
                seed,
                ..Default::default()
            },
        );
        let mut driver = ChaCha8Rng::seed_from_u64(seed ^ 0xdead_beef);
        let mut last = engine.snapshot();

        for _ in 0..400 {
            let snap = match driver.gen_range(0..10) {
                0 => {
                    let _ = engine.open_reward();
                    engine.snapshot()
                }
                1 | 2 => {
                    let candidate = if last.hand.is_empty() {
                        driver.gen_range(1..50)
                    } else {
                        last.hand[driver.gen_range(0..last.hand.len())].id
                    };
                    let x = driver.gen_range(0.0..800.0);
                    engine.place_unit(candidate, x).unwrap_or_else(|_| engine.snapshot())
                }
                _ => engine.advance(driver.gen_range(0.0..0.5)),
            };

            assert!(snap.player.health <= last.player.health, "seed {seed}: health increased");
            assert!(snap.wave >= last.wave, "seed {seed}: wave went backwards");
            assert!(snap.time.elapsed_secs >= last.time.elapsed_secs);
            assert!(!snap.victory || snap.game_over);
            assert_eq!(snap.game_over, snap.phase.is_over());
            if last.game_over {
                assert_eq!(snap.time, last.time, "seed {seed}: clock moved after game over");
            }

            let mut ids = HashSet::new();
            for unit in &snap.hand {
                assert!(ids.insert(unit.id), "seed {seed}: duplicate unit id {}", unit.id);
            }
            for unit in &snap.field {
                assert!(ids.insert(unit.id), "seed {seed}: duplicate unit id {}", unit.id);
                assert!(unit.health >= 0.0);
                assert!(unit.position.y >= ENEMY_BASE_Y && unit.position.y <= PLACEMENT_LANE_Y);
            }
            let mut enemy_ids = HashSet::new();
            for enemy in &snap.enemies {
                assert!(enemy_ids.insert(enemy.id));
                assert!(enemy.health > 0.0);
            }

            last = snap;
        }
    }
}
