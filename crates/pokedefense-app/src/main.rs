use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use pokedefense_app::config::AppConfig;
use pokedefense_app::game_loop::spawn_game_loop;
use pokedefense_app::recorder::LogRecorder;
use pokedefense_app::registry::SessionRegistry;
use pokedefense_app::state::shared_snapshot;
use pokedefense_core::types::PlayerId;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    info!(
        seed = config.sim.seed,
        tick_rate = config.tick_rate,
        paced = config.paced,
        autopilot = config.autopilot,
        "starting pokedefense"
    );

    let player = PlayerId(1);
    let registry = Arc::new(SessionRegistry::new(config.sim.clone()));
    registry.create(player)?;

    let latest = shared_snapshot();
    // The sender stays alive until the loop stops; dropping it would end the loop.
    let (_cmd_tx, handle) = spawn_game_loop(Arc::clone(&registry), player, &config, latest)?;

    let exit = handle.join().map_err(|_| "game loop thread panicked")?;
    info!(?exit, "game loop finished");

    let summary = registry.end(player, &LogRecorder)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
