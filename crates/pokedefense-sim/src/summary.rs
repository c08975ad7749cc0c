//! Result finalization: the terminal summary handed to the recorder.

use std::time::Duration;

use pokedefense_core::constants::{SCORE_PER_KILL, VICTORY_BONUS, WAVE_COMPLETION_BONUS};
use pokedefense_core::enums::GamePhase;
use pokedefense_core::state::ResultSummary;
use pokedefense_core::types::PlayerId;

use crate::player::PlayerState;

/// Everything the summary is derived from.
pub struct SummaryInput<'a> {
    pub player_id: PlayerId,
    pub phase: GamePhase,
    pub player: &'a PlayerState,
    pub wave_number: u32,
    pub units_acquired: u32,
    pub wall_clock: Duration,
    pub sim_elapsed_secs: f64,
}

pub fn build_summary(input: &SummaryInput<'_>) -> ResultSummary {
    let victory = input.phase.is_victory();
    let waves_completed = input.wave_number.saturating_sub(1);
    let victory_bonus = if victory { VICTORY_BONUS } else { 0 };

    ResultSummary {
        player_id: input.player_id,
        victory,
        score: input.player.score,
        currency_earned: input.player.currency + waves_completed * WAVE_COMPLETION_BONUS + victory_bonus,
        waves_completed,
        units_acquired: input.units_acquired,
        enemies_defeated: input.player.score / SCORE_PER_KILL,
        duration_secs: input.wall_clock.as_secs_f64(),
        sim_elapsed_secs: input.sim_elapsed_secs,
    }
}
