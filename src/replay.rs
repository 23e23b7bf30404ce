//! Headless replay of an action record file.

use std::path::Path;

use crate::record::{self, RecordError};
use crate::store::ScoreStore;

/// Outcome of a replay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Actions the reducer recognized.
    pub applied: usize,
    /// Unrecognized actions, dispatched as no-ops.
    pub ignored: usize,
    pub final_score: i64,
}

/// Dispatch every record in `path` into `store`, in file order.
pub fn replay_file(store: &ScoreStore, path: &Path) -> Result<ReplaySummary, RecordError> {
    let intents = record::load(path)?;
    let mut summary = ReplaySummary {
        applied: 0,
        ignored: 0,
        final_score: store.state().score,
    };

    for intent in intents {
        if intent.is_recognized() {
            summary.applied += 1;
        } else {
            tracing::warn!(kind = intent.kind(), "ignoring unrecognized action");
            summary.ignored += 1;
        }
        store.dispatch(intent);
    }

    summary.final_score = store.state().score;
    tracing::info!(
        applied = summary.applied,
        ignored = summary.ignored,
        score = summary.final_score,
        "replay finished"
    );
    Ok(summary)
}
