//! Simulation engine: one instance per player session.
//!
//! `SimulationEngine` owns the hecs ECS world, the hand, the wave queue and
//! the player's resources. It runs the tick passes in order and produces
//! `GameStateSnapshot`s. Time only moves through caller-supplied deltas, so
//! a session is a deterministic function of its seed and command sequence.

use std::time::Instant;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use pokedefense_core::commands::{CommandOutcome, PlayerCommand};
use pokedefense_core::components::FieldUnit;
use pokedefense_core::constants::*;
use pokedefense_core::enums::GamePhase;
use pokedefense_core::errors::{CommandError, PlacementError, RewardError};
use pokedefense_core::events::GameEvent;
use pokedefense_core::state::{GameStateSnapshot, HandUnit, ResultSummary};
use pokedefense_core::types::{EnemyId, PlayerId, Position, SimTime, UnitId};

use crate::player::PlayerState;
use crate::summary::{self, SummaryInput};
use crate::systems;
use crate::systems::wave_spawner::WaveQueue;
use crate::world_setup;

/// Per-session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// The session is won once the wave counter exceeds this.
    pub victory_wave: u32,
    /// Seconds between enemy spawns.
    pub spawn_interval_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            victory_wave: VICTORY_WAVE,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    player_id: PlayerId,
    config: SimConfig,
    world: World,
    time: SimTime,
    started_at: Instant,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: PlayerState,
    hand: Vec<HandUnit>,
    wave: WaveQueue,
    next_unit_id: UnitId,
    next_enemy_id: EnemyId,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Start a session: starting resources, a two-unit opening hand and
    /// the first wave queued.
    pub fn new(player_id: PlayerId, config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut next_unit_id = 1;
        let hand = world_setup::draw_starting_hand(&mut rng, &mut next_unit_id);
        let wave = WaveQueue::first(&mut rng);

        info!(%player_id, seed = config.seed, queued = wave.remaining(), "session started");

        Self {
            player_id,
            config,
            world: World::new(),
            time: SimTime::default(),
            started_at: Instant::now(),
            phase: GamePhase::Active,
            rng,
            player: PlayerState::default(),
            hand,
            wave,
            next_unit_id,
            next_enemy_id: 1,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Start a session with the default configuration.
    pub fn new_session(player_id: PlayerId) -> Self {
        Self::new(player_id, SimConfig::default())
    }

    /// Advance the session by `dt` seconds and return the resulting snapshot.
    /// A no-op returning the frozen snapshot once the game is over.
    pub fn advance(&mut self, dt: f64) -> GameStateSnapshot {
        if self.phase == GamePhase::Active {
            let dt = sanitize_dt(dt);
            self.run_systems(dt);
            self.time.advance(dt);
        }
        self.snapshot()
    }

    /// Move a hand unit onto the placement lane at `x`.
    ///
    /// Checks, in order: the unit is in the hand, `x` is inside the playable
    /// range, no field unit sits inside the separation box. A failed check
    /// leaves hand and field untouched. After game over this is a no-op
    /// returning the frozen snapshot.
    pub fn place_unit(&mut self, unit_id: UnitId, x: f64) -> Result<GameStateSnapshot, PlacementError> {
        if self.phase.is_over() {
            return Ok(self.snapshot());
        }

        let index = self
            .hand
            .iter()
            .position(|unit| unit.id == unit_id)
            .ok_or(PlacementError::UnitNotFound(unit_id))?;

        if !(FIELD_MIN_X..=FIELD_MAX_X).contains(&x) {
            return Err(PlacementError::OutOfBounds {
                x,
                min: FIELD_MIN_X,
                max: FIELD_MAX_X,
            });
        }

        let target = Position::new(x, PLACEMENT_LANE_Y);
        if let Some(occupant) = self.occupant_near(&target) {
            return Err(PlacementError::PositionOccupied { x, occupant });
        }

        let unit = self.hand.remove(index);
        debug!(unit_id, name = %unit.name, x, "unit placed");
        world_setup::spawn_field_unit(&mut self.world, unit, x);
        self.events.push(GameEvent::UnitPlaced { unit_id, x });

        Ok(self.snapshot())
    }

    /// Spend a reward token to draw a unit from the reward catalog into the hand.
    pub fn open_reward(&mut self) -> Result<HandUnit, RewardError> {
        if self.phase.is_over() {
            return Err(RewardError::SessionAlreadyOver);
        }
        if !self.player.spend_token() {
            return Err(RewardError::InsufficientTokens);
        }

        let unit = world_setup::draw_reward(&mut self.rng, &mut self.next_unit_id);
        debug!(unit_id = unit.id, name = %unit.name, tokens_left = self.player.reward_tokens, "reward opened");
        self.events.push(GameEvent::UnitDrawn {
            unit_id: unit.id,
            name: unit.name.clone(),
        });
        self.hand.push(unit.clone());
        Ok(unit)
    }

    /// Dispatch a player command to the matching operation.
    pub fn apply(&mut self, command: PlayerCommand) -> Result<CommandOutcome, CommandError> {
        match command {
            PlayerCommand::OpenReward => {
                let unit = self.open_reward()?;
                Ok(CommandOutcome::Drawn { unit })
            }
            PlayerCommand::PlaceUnit { unit_id, x } => {
                let snapshot = self.place_unit(unit_id, x)?;
                Ok(CommandOutcome::Placed {
                    snapshot: Box::new(snapshot),
                })
            }
        }
    }

    /// Build a snapshot of the current state, draining buffered events into it.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.player,
            &self.hand,
            &self.wave,
            events,
        )
    }

    /// Compute the terminal summary without ending the session.
    pub fn summary(&self) -> ResultSummary {
        summary::build_summary(&SummaryInput {
            player_id: self.player_id,
            phase: self.phase,
            player: &self.player,
            wave_number: self.wave.number,
            units_acquired: (self.hand.len() + self.field_count()) as u32,
            wall_clock: self.started_at.elapsed(),
            sim_elapsed_secs: self.time.elapsed_secs,
        })
    }

    /// Finalize the session. The engine is consumed; persisting the summary
    /// is the caller's job.
    pub fn end_session(self) -> ResultSummary {
        let summary = self.summary();
        info!(
            player_id = %self.player_id,
            victory = summary.victory,
            score = summary.score,
            currency = summary.currency_earned,
            "session ended"
        );
        summary
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn hand(&self) -> &[HandUnit] {
        &self.hand
    }

    pub fn wave(&self) -> &WaveQueue {
        &self.wave
    }

    pub fn field_count(&self) -> usize {
        self.world.query::<&FieldUnit>().iter().count()
    }

    /// Add an arbitrary unit to the hand (for tests needing exact stats).
    #[cfg(test)]
    pub fn insert_hand_unit(&mut self, mut unit: HandUnit) -> UnitId {
        unit.id = world_setup::allocate_unit_id(&mut self.next_unit_id);
        let id = unit.id;
        self.hand.push(unit);
        id
    }

    /// Spawn an enemy at an exact position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        spec: &pokedefense_core::catalog::EnemySpec,
        position: Position,
    ) -> EnemyId {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        world_setup::spawn_enemy(&mut self.world, spec, id, position);
        id
    }

    /// Remove every live enemy (for tests that need the base untouched).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let enemies: Vec<Entity> = self
            .world
            .query::<&pokedefense_core::components::Enemy>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in enemies {
            let _ = self.world.despawn(entity);
        }
    }

    /// Lowest-id field unit inside the separation box around `target`.
    fn occupant_near(&self, target: &Position) -> Option<UnitId> {
        self.world
            .query::<(&FieldUnit, &Position)>()
            .iter()
            .filter(|(_, (_, pos))| pos.within_box(target, MIN_SEPARATION_X, MIN_SEPARATION_Y))
            .map(|(_, (unit, _))| unit.id)
            .min()
    }

    /// Run all passes in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Spawn pass
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &mut self.next_enemy_id,
            self.config.spawn_interval_secs,
            dt,
            &mut self.events,
        );
        // 2. Enemy movement and base breaches
        systems::movement::run(&mut self.world, &mut self.player, dt, &mut self.events);
        if self.player.is_defeated() {
            self.finish(GamePhase::Defeat);
        }
        // 3. Field units
        systems::field_units::run(
            &mut self.world,
            &mut self.player,
            self.wave.number,
            dt,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 4. Cleanup, then victory (never overrides a defeat from this tick)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        if self.wave.number > self.config.victory_wave {
            self.finish(GamePhase::Victory);
        }
    }

    /// Enter a terminal phase. The first terminal phase wins.
    fn finish(&mut self, phase: GamePhase) {
        if self.phase.is_over() {
            return;
        }
        self.phase = phase;
        let victory = phase.is_victory();
        info!(
            player_id = %self.player_id,
            victory,
            wave = self.wave.number,
            score = self.player.score,
            "game over"
        );
        self.events.push(GameEvent::GameOver { victory });
    }
}

/// Negative or non-finite deltas would rewind or poison the clock.
fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        warn!(dt, "invalid delta, treating as zero");
        0.0
    }
}
