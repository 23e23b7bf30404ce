mod common;

use common::temp_file;
use tally::record::RecordError;
use tally::replay::{replay_file, ReplaySummary};
use tally::store::ScoreStore;

#[test]
fn replay_applies_records_in_order() {
    let (_dir, path) = temp_file(
        "actions.jsonl",
        r#"{"type": "INCREMENT"}
{"type": "INCREMENT", "value": 10}
{"type": "DECREMENT", "value": 4}
"#,
    );

    let store = ScoreStore::seeded();
    let summary = replay_file(&store, &path).unwrap();

    assert_eq!(
        summary,
        ReplaySummary {
            applied: 3,
            ignored: 0,
            final_score: 9,
        }
    );
    assert_eq!(store.state().score, 9);
}

#[test]
fn replay_counts_unrecognized_records() {
    let (_dir, path) = temp_file(
        "actions.jsonl",
        r#"{"type": "UNKNOWN", "value": 5}
{"value": 3}
{"type": "DECREMENT"}
"#,
    );

    let store = ScoreStore::seeded();
    let summary = replay_file(&store, &path).unwrap();

    assert_eq!(summary.applied, 1);
    assert_eq!(summary.ignored, 2);
    assert_eq!(summary.final_score, 1);
}

#[test]
fn replay_of_empty_file_keeps_seed() {
    let (_dir, path) = temp_file("actions.jsonl", "# nothing yet\n");
    let store = ScoreStore::seeded();
    let summary = replay_file(&store, &path).unwrap();
    assert_eq!(summary.final_score, 2);
    assert_eq!(summary.applied + summary.ignored, 0);
}

#[test]
fn malformed_record_stops_before_dispatching() {
    let (_dir, path) = temp_file(
        "actions.jsonl",
        "{\"type\": \"INCREMENT\"}\nnot json\n",
    );

    let store = ScoreStore::seeded();
    let err = replay_file(&store, &path).unwrap_err();

    assert!(matches!(err, RecordError::Malformed { line: 2, .. }));
    assert_eq!(store.state().score, 2);
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = ScoreStore::seeded();
    let err = replay_file(&store, &dir.path().join("absent.jsonl")).unwrap_err();
    assert!(matches!(err, RecordError::ReadError { .. }));
}

#[test]
fn non_string_type_is_ignored_not_fatal() {
    let (_dir, path) = temp_file(
        "actions.jsonl",
        "{\"type\": 5, \"value\": 3}\n{\"type\": true}\n{\"type\": \"INCREMENT\"}\n",
    );

    let store = ScoreStore::seeded();
    let summary = replay_file(&store, &path).unwrap();

    assert_eq!(summary.applied, 1);
    assert_eq!(summary.ignored, 2);
    assert_eq!(summary.final_score, 3);
}
