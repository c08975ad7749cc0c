//! Game loop thread: advances one session at a fixed tick rate.
//!
//! Commands arrive via an `mpsc` channel and are applied to the session
//! through the registry before each tick, followed by the autopilot's
//! commands when it is enabled. The latest snapshot is stored in shared
//! state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use pokedefense_core::commands::PlayerCommand;
use pokedefense_core::state::GameStateSnapshot;
use pokedefense_core::types::PlayerId;

use crate::autopilot;
use crate::config::AppConfig;
use crate::registry::{RegistryError, SessionRegistry};
use crate::state::{GameLoopCommand, LoopExit, SharedSnapshot};

/// Per-loop settings derived from `AppConfig`.
#[derive(Debug, Clone, Copy)]
struct LoopSettings {
    dt: f64,
    tick_duration: Duration,
    max_ticks: u64,
    paced: bool,
    autopilot: bool,
}

impl LoopSettings {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            dt: config.dt(),
            tick_duration: config.tick_duration(),
            max_ticks: config.max_ticks,
            paced: config.paced,
            autopilot: config.autopilot,
        }
    }
}

/// Spawns the game loop for `player` in a new thread. The session must
/// already exist in the registry.
///
/// Returns the command sender and the thread handle, which yields the
/// reason the loop stopped.
pub fn spawn_game_loop(
    registry: Arc<SessionRegistry>,
    player: PlayerId,
    config: &AppConfig,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<LoopExit>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let settings = LoopSettings::from_config(config);

    let handle = std::thread::Builder::new()
        .name(format!("pokedefense-{player}"))
        .spawn(move || {
            let exit = run_game_loop(&registry, player, settings, cmd_rx, &latest_snapshot);
            info!(%player, ?exit, "game loop stopped");
            exit
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until shutdown, disconnect, game over or the tick limit.
fn run_game_loop(
    registry: &SessionRegistry,
    player: PlayerId,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> LoopExit {
    let mut next_tick_time = Instant::now();
    let mut ticks = 0u64;
    let mut last_snapshot: Option<GameStateSnapshot> = None;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(command)) => {
                    if let Err(err) = apply_command(registry, player, command) {
                        return LoopExit::SessionLost(err);
                    }
                }
                Ok(GameLoopCommand::Shutdown) => return LoopExit::Shutdown,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return LoopExit::Disconnected,
            }
        }

        // 2. Autopilot plans from the previous tick's state
        if settings.autopilot {
            let planned = match &last_snapshot {
                Some(snapshot) => autopilot::plan(snapshot),
                None => match registry.with_session(player, |engine| engine.snapshot()) {
                    Ok(snapshot) => autopilot::plan(&snapshot),
                    Err(err) => return LoopExit::SessionLost(err),
                },
            };
            for command in planned {
                if let Err(err) = apply_command(registry, player, command) {
                    return LoopExit::SessionLost(err);
                }
            }
        }

        // 3. Advance one tick
        let snapshot = match registry.with_session(player, |engine| engine.advance(settings.dt)) {
            Ok(snapshot) => snapshot,
            Err(err) => return LoopExit::SessionLost(err),
        };
        ticks += 1;
        let game_over = snapshot.game_over;

        // 4. Store latest snapshot for polling
        if settings.autopilot {
            last_snapshot = Some(snapshot.clone());
        }
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if game_over {
            return LoopExit::GameOver;
        }
        if settings.max_ticks > 0 && ticks >= settings.max_ticks {
            return LoopExit::TickLimit;
        }

        // 5. Sleep until next tick
        if settings.paced {
            next_tick_time += settings.tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > settings.tick_duration * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

/// Apply one command. Rejections are logged and otherwise ignored; only a
/// missing session stops the loop.
fn apply_command(registry: &SessionRegistry, player: PlayerId, command: PlayerCommand) -> Result<(), RegistryError> {
    if let Err(err) = registry.with_session(player, |engine| engine.apply(command))? {
        debug!(%player, %err, "command rejected");
    }
    Ok(())
}
