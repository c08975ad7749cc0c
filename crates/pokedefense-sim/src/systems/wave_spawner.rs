//! Wave spawning system: pops queued enemies on the spawn interval and
//! regenerates a harder wave whenever the queue drains.

use std::collections::VecDeque;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use pokedefense_core::catalog::{EnemySpec, ENEMY_CATALOG};
use pokedefense_core::constants::*;
use pokedefense_core::events::GameEvent;
use pokedefense_core::types::{EnemyId, Position};

/// Number of enemies queued for a wave.
pub fn wave_size(wave: u32) -> u32 {
    (WAVE_BASE_ENEMIES + wave).min(MAX_ENEMIES_PER_WAVE)
}

/// Build the enemy queue for a wave. Each slot is drawn uniformly from
/// the enemy catalog with stats scaled by the wave number.
pub fn generate_wave(rng: &mut ChaCha8Rng, wave: u32) -> VecDeque<EnemySpec> {
    (0..wave_size(wave))
        .map(|_| ENEMY_CATALOG[rng.gen_range(0..ENEMY_CATALOG.len())].scaled(wave))
        .collect()
}

/// The current wave and its remaining queue.
#[derive(Debug, Clone)]
pub struct WaveQueue {
    /// Monotonically increasing wave counter, starting at 1.
    pub number: u32,
    pub pending: VecDeque<EnemySpec>,
    /// Seconds accumulated since the last spawn.
    pub spawn_timer: f64,
}

impl WaveQueue {
    pub fn new(rng: &mut ChaCha8Rng, number: u32) -> Self {
        Self {
            number,
            pending: generate_wave(rng, number),
            spawn_timer: 0.0,
        }
    }

    pub fn first(rng: &mut ChaCha8Rng) -> Self {
        Self::new(rng, 1)
    }

    pub fn remaining(&self) -> u32 {
        self.pending.len() as u32
    }
}

/// Accumulate `dt` and spawn at most one enemy once the interval elapses.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveQueue,
    next_enemy_id: &mut EnemyId,
    spawn_interval: f64,
    dt: f64,
    events: &mut Vec<GameEvent>,
) {
    wave.spawn_timer += dt;
    if wave.spawn_timer < spawn_interval {
        return;
    }
    let Some(spec) = wave.pending.pop_front() else {
        return;
    };

    let id = *next_enemy_id;
    *next_enemy_id += 1;
    // Whole-pixel columns only.
    let x = rng.gen_range(FIELD_MIN_X as i32..=FIELD_MAX_X as i32) as f64;
    crate::world_setup::spawn_enemy(world, &spec, id, Position::new(x, ENEMY_BASE_Y));
    wave.spawn_timer = 0.0;

    debug!(enemy_id = id, name = spec.name, x, wave = wave.number, "enemy spawned");
    events.push(GameEvent::EnemySpawned {
        enemy_id: id,
        name: spec.name.to_string(),
        x,
    });

    if wave.pending.is_empty() {
        *wave = WaveQueue::new(rng, wave.number + 1);
        info!(wave = wave.number, queued = wave.remaining(), "wave advanced");
        events.push(GameEvent::WaveAdvanced {
            wave: wave.number,
            queued: wave.remaining(),
        });
    }
}
