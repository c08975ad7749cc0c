//! Simulation constants and tuning parameters.

// --- Player ---

/// Player base health at session start.
pub const STARTING_HEALTH: u32 = 100;

/// Player level at session start.
pub const STARTING_LEVEL: u32 = 1;

/// Experience needed for the first level-up.
pub const STARTING_EXP_THRESHOLD: u32 = 100;

/// Reward tokens granted at session start.
pub const STARTING_REWARD_TOKENS: u32 = 5;

/// Units drawn from the starter catalog into the opening hand.
pub const STARTING_HAND_SIZE: usize = 2;

/// Threshold growth on every level-up, as an exact ratio (x1.2, floored).
pub const EXP_THRESHOLD_GROWTH_NUM: u32 = 6;
pub const EXP_THRESHOLD_GROWTH_DEN: u32 = 5;

/// Reward tokens granted on every level-up.
pub const LEVEL_UP_REWARD_TOKENS: u32 = 2;

// --- Battlefield geometry ---

/// y of the player's base line. Enemies that reach it breach the base.
pub const PLAYER_BASE_Y: f64 = 450.0;

/// y of the enemy base line. Enemies spawn here, field units march to it.
pub const ENEMY_BASE_Y: f64 = 100.0;

/// Fixed lane y for placed units, just above the player's base.
pub const PLACEMENT_LANE_Y: f64 = PLAYER_BASE_Y - 50.0;

/// Playable horizontal range (inclusive) for placement and spawning.
pub const FIELD_MIN_X: f64 = 50.0;
pub const FIELD_MAX_X: f64 = 750.0;

/// Two units closer than this on x (and `MIN_SEPARATION_Y` on y) collide.
pub const MIN_SEPARATION_X: f64 = 80.0;
pub const MIN_SEPARATION_Y: f64 = 50.0;

// --- Waves ---

/// Seconds between enemy spawns.
pub const SPAWN_INTERVAL_SECS: f64 = 1.5;

/// The session is won once the wave counter exceeds this.
pub const VICTORY_WAVE: u32 = 5;

/// Enemies per wave are `WAVE_BASE_ENEMIES + wave`, capped at this.
pub const WAVE_BASE_ENEMIES: u32 = 3;
pub const MAX_ENEMIES_PER_WAVE: u32 = 10;

/// Player health lost per enemy reaching the base line.
pub const BASE_BREACH_DAMAGE: u32 = 20;

// --- Field units ---

/// Euclidean attack range of every field unit.
pub const ATTACK_RANGE: f64 = 120.0;

/// Seconds between attacks.
pub const ATTACK_COOLDOWN_SECS: f64 = 0.8;

/// Unit catalog speeds are multiplied by this when advancing.
pub const UNIT_SPEED_SCALE: f64 = 30.0;

/// Seconds between self-damage ticks while entrenched.
pub const ENTRENCHED_DAMAGE_PERIOD_SECS: f64 = 1.0;

// --- Rewards ---

pub const SCORE_PER_KILL: u32 = 15;
pub const EXP_PER_KILL: u32 = 2;
pub const CURRENCY_PER_KILL: u32 = 1;

pub const ENTRENCH_SCORE_BONUS: u32 = 50;
pub const ENTRENCH_CURRENCY_BONUS: u32 = 5;

/// Currency per completed wave, paid when the session ends.
pub const WAVE_COMPLETION_BONUS: u32 = 10;

/// Currency paid on victory when the session ends.
pub const VICTORY_BONUS: u32 = 50;
