//! Destinations for finished session results.

use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

use pokedefense_core::state::ResultSummary;

/// Receives the summary of every session that ends.
pub trait ResultRecorder: Send + Sync {
    fn record(&self, summary: &ResultSummary);
}

/// Keeps summaries in memory. Used by tests and by callers that batch
/// results themselves.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    summaries: Mutex<Vec<ResultSummary>>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summaries(&self) -> Vec<ResultSummary> {
        self.summaries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl ResultRecorder for MemoryRecorder {
    fn record(&self, summary: &ResultSummary) {
        self.summaries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(summary.clone());
    }
}

/// Emits each summary as a structured log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRecorder;

impl ResultRecorder for LogRecorder {
    fn record(&self, summary: &ResultSummary) {
        match serde_json::to_string(summary) {
            Ok(json) => info!(
                player_id = %summary.player_id,
                victory = summary.victory,
                score = summary.score,
                result = %json,
                "session result"
            ),
            Err(err) => warn!(player_id = %summary.player_id, %err, "failed to serialize session result"),
        }
    }
}
