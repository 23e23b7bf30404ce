//! Enhancer that appends every score transition to a JSON-lines file.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;
use thiserror::Error;

use crate::record::ActionRecord;
use crate::store::Enhancer;
use crate::ui::score::{ScoreIntent, ScoreReducer, ScoreState};

/// Errors that can occur when opening or writing the action log.
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("Failed to open action log '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write action log: {0}")]
    Write(#[from] std::io::Error),

    #[error("Failed to encode action record: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct RecordedTransition {
    action: ActionRecord,
    score: i64,
    changed: bool,
}

struct RecorderInner {
    writer: Box<dyn Write + Send>,
    pending: Option<ActionRecord>,
}

impl RecorderInner {
    fn write_line(&mut self, line: &RecordedTransition) -> Result<(), RecorderError> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Records `{"action", "score", "changed"}` for each dispatch.
///
/// Write failures are logged and never fail the dispatch.
pub struct ActionRecorder {
    inner: Mutex<RecorderInner>,
}

impl ActionRecorder {
    /// Append to the file at `path`, creating it and its parent directories.
    pub fn create(path: &Path) -> Result<Self, RecorderError> {
        let open_error = |source| RecorderError::Open {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(open_error)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_error)?;
        tracing::info!(path = %path.display(), "recording actions");
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            inner: Mutex::new(RecorderInner {
                writer: Box::new(writer),
                pending: None,
            }),
        }
    }
}

impl Enhancer<ScoreReducer> for ActionRecorder {
    fn on_dispatch(&self, intent: &ScoreIntent, _previous: &ScoreState) {
        self.inner.lock().pending = Some(ActionRecord::from(intent));
    }

    fn on_reduced(&self, next: &ScoreState, changed: bool) {
        let mut inner = self.inner.lock();
        let Some(action) = inner.pending.take() else {
            return;
        };
        let line = RecordedTransition {
            action,
            score: next.score,
            changed,
        };
        if let Err(err) = inner.write_line(&line) {
            tracing::warn!(error = %err, "failed to record action");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;
    use crate::store::ScoreStore;
    use tempfile::TempDir;

    #[test]
    fn writes_one_line_per_dispatch() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("actions.jsonl");
        let recorder = ActionRecorder::create(&path).unwrap();
        let store = ScoreStore::configure(ScoreState::seed(), Some(Box::new(recorder)));

        store.dispatch(ScoreIntent::increment_one());
        store.dispatch(ScoreIntent::from_kind("UNKNOWN", 5));

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["action"]["type"], "INCREMENT");
        assert_eq!(lines[0]["score"], 3);
        assert_eq!(lines[0]["changed"], true);
        assert_eq!(lines[1]["action"]["type"], "UNKNOWN");
        assert_eq!(lines[1]["changed"], false);
    }

    #[test]
    fn recorded_file_replays_to_same_score() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actions.jsonl");
        let store = ScoreStore::configure(
            ScoreState::seed(),
            Some(Box::new(ActionRecorder::create(&path).unwrap())),
        );
        store.dispatch(ScoreIntent::increment(10));
        store.dispatch(ScoreIntent::decrement(4));

        let replayed = ScoreStore::seeded();
        for intent in record::load(&path).unwrap() {
            replayed.dispatch(intent);
        }
        assert_eq!(replayed.state().score, store.state().score);
    }

    #[test]
    fn appends_to_existing_log() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actions.jsonl");
        fs::write(&path, "{\"type\":\"INCREMENT\"}\n").unwrap();

        let store = ScoreStore::configure(
            ScoreState::seed(),
            Some(Box::new(ActionRecorder::create(&path).unwrap())),
        );
        store.dispatch(ScoreIntent::decrement_one());

        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
    }
}
