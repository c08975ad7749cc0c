//! Application configuration, loaded from an optional JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pokedefense_sim::SimConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level settings for the host process. Every field is optional in
/// the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base session settings; the registry offsets the seed per player.
    pub sim: SimConfig,
    /// Ticks per simulated second.
    pub tick_rate: u32,
    /// Stop the loop after this many ticks (0 = run until game over).
    pub max_ticks: u64,
    /// Sleep between ticks to match wall-clock time.
    pub paced: bool,
    /// Let the built-in autopilot issue commands before every tick.
    pub autopilot: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            tick_rate: 30,
            max_ticks: 30 * 60 * 10,
            paced: false,
            autopilot: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wall-clock duration of one tick. A zero tick rate is treated as 1 Hz.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.tick_rate.max(1) as u64)
    }

    /// Simulated seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate.max(1) as f64
    }
}
