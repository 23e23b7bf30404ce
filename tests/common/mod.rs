//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tally::store::{ScoreStore, Subscription};
use tally::ui::score::ScoreState;
use tempfile::TempDir;

/// Log of listener invocations, tagged by listener name.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

/// Subscribe a listener that appends `name` to `log` on every notification.
pub fn tagged_listener(store: &ScoreStore, log: &CallLog, name: &'static str) -> Subscription {
    let log = Arc::clone(log);
    store.subscribe(move || log.lock().push(name))
}

/// Subscribe a listener that records the score it observes on every notification.
pub fn score_observer(store: &ScoreStore) -> (Arc<Mutex<Vec<i64>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let reader = store.clone();
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(move || sink.lock().push(reader.state().score));
    (seen, subscription)
}

/// Subscribe a listener that keeps the state handle it reads on every notification.
pub fn state_observer(store: &ScoreStore) -> (Arc<Mutex<Vec<Arc<ScoreState>>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let reader = store.clone();
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(move || sink.lock().push(reader.state()));
    (seen, subscription)
}

/// Write `content` to a file named `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
