//! A naive player used by the binary to drive a session without input.
//!
//! Opens a reward whenever a token is available and places hand units into
//! the first free lane slot.

use pokedefense_core::commands::PlayerCommand;
use pokedefense_core::constants::{MIN_SEPARATION_X, MIN_SEPARATION_Y, PLACEMENT_LANE_Y};
use pokedefense_core::state::GameStateSnapshot;
use pokedefense_core::types::Position;

/// Candidate placement columns, spaced wider than the separation box.
const LANE_SLOTS: [f64; 7] = [100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0];

/// Commands to issue for the given state. At most one of each kind.
pub fn plan(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if snapshot.game_over {
        return commands;
    }

    if snapshot.player.reward_tokens > 0 {
        commands.push(PlayerCommand::OpenReward);
    }
    if let (Some(unit), Some(x)) = (snapshot.hand.first(), free_slot(snapshot)) {
        commands.push(PlayerCommand::PlaceUnit { unit_id: unit.id, x });
    }
    commands
}

/// First lane slot with no field unit inside the separation box.
fn free_slot(snapshot: &GameStateSnapshot) -> Option<f64> {
    LANE_SLOTS.iter().copied().find(|&x| {
        let slot = Position::new(x, PLACEMENT_LANE_Y);
        !snapshot
            .field
            .iter()
            .any(|unit| unit.position.within_box(&slot, MIN_SEPARATION_X, MIN_SEPARATION_Y))
    })
}
