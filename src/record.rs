//! External form of score actions.
//!
//! An action record is a JSON object `{"type": "INCREMENT", "value": 1}`.
//! Record files hold one object per line. Lines written by the
//! [`ActionRecorder`](crate::store::ActionRecorder) wrap the action as
//! `{"action": {...}, "score": 3, "changed": true}` and are accepted too.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::score::ScoreIntent;

/// Errors that can occur when reading action records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to read action records '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed action record on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn default_value() -> i64 {
    1
}

/// Serialized action. A missing or non-string `type` decodes as an
/// unrecognized action, a missing `value` as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<serde_json::Value>,
    #[serde(default = "default_value")]
    pub value: i64,
}

impl From<ActionRecord> for ScoreIntent {
    fn from(record: ActionRecord) -> Self {
        match record.kind {
            Some(serde_json::Value::String(kind)) => ScoreIntent::from_kind(&kind, record.value),
            Some(other) => ScoreIntent::Unrecognized {
                kind: other.to_string(),
                value: record.value,
            },
            None => ScoreIntent::from_kind("", record.value),
        }
    }
}

impl From<&ScoreIntent> for ActionRecord {
    fn from(intent: &ScoreIntent) -> Self {
        let kind = intent.kind();
        Self {
            kind: (!kind.is_empty()).then(|| serde_json::Value::String(kind.to_string())),
            value: intent.value(),
        }
    }
}

/// Decode a single line. Accepts a bare action or a recorder line.
pub fn parse_line(line: &str) -> Result<ActionRecord, serde_json::Error> {
    let mut value: serde_json::Value = serde_json::from_str(line)?;
    if let Some(action) = value.get_mut("action") {
        return serde_json::from_value(action.take());
    }
    serde_json::from_value(value)
}

/// Decode every record from `reader`, skipping blank lines and `#` comments.
pub fn read_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<ScoreIntent>, RecordError> {
    let mut intents = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| RecordError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let record = parse_line(trimmed).map_err(|source| RecordError::Malformed {
            line: index + 1,
            source,
        })?;
        intents.push(ScoreIntent::from(record));
    }
    Ok(intents)
}

/// Load a record file from disk.
pub fn load(path: &Path) -> Result<Vec<ScoreIntent>, RecordError> {
    let file = File::open(path).map_err(|source| RecordError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(BufReader::new(file), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Vec<ScoreIntent>, RecordError> {
        read_records(input.as_bytes(), Path::new("inline"))
    }

    #[test]
    fn known_types_decode_to_intents() {
        let intents = parse(
            r#"{"type": "INCREMENT", "value": 3}
{"type": "DECREMENT", "value": 2}"#,
        )
        .unwrap();
        assert_eq!(
            intents,
            vec![ScoreIntent::increment(3), ScoreIntent::decrement(2)]
        );
    }

    #[test]
    fn value_defaults_to_one() {
        let intents = parse(r#"{"type": "INCREMENT"}"#).unwrap();
        assert_eq!(intents, vec![ScoreIntent::increment_one()]);
    }

    #[test]
    fn missing_type_is_unrecognized() {
        let intents = parse(r#"{"value": 5}"#).unwrap();
        assert_eq!(intents.len(), 1);
        assert!(!intents[0].is_recognized());
        assert_eq!(intents[0].kind(), "");
    }

    #[test]
    fn unknown_type_is_kept_as_unrecognized() {
        let intents = parse(r#"{"type": "UNKNOWN", "value": 5}"#).unwrap();
        assert_eq!(intents, vec![ScoreIntent::from_kind("UNKNOWN", 5)]);
    }

    #[test]
    fn non_string_type_is_unrecognized() {
        let intents = parse(
            r#"{"type": 5, "value": 3}
{"type": true}
{"type": {"name": "INCREMENT"}}
{"type": null, "value": 2}"#,
        )
        .unwrap();
        assert_eq!(
            intents,
            vec![
                ScoreIntent::from_kind("5", 3),
                ScoreIntent::from_kind("true", 1),
                ScoreIntent::from_kind(r#"{"name":"INCREMENT"}"#, 1),
                ScoreIntent::from_kind("", 2),
            ]
        );
        assert!(intents.iter().all(|intent| !intent.is_recognized()));
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let intents = parse("# warmup\n\n{\"type\": \"INCREMENT\"}\n   \n").unwrap();
        assert_eq!(intents.len(), 1);
    }

    #[test]
    fn fractional_value_is_rejected_with_line_number() {
        let err = parse("{\"type\": \"INCREMENT\"}\n{\"type\": \"INCREMENT\", \"value\": 1.5}")
            .unwrap_err();
        assert!(matches!(err, RecordError::Malformed { line: 2, .. }));
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        let err = parse(r#"{"type": "INCREMENT", "value": "ten"}"#).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { line: 1, .. }));
    }

    #[test]
    fn recorder_lines_are_unwrapped() {
        let intents =
            parse(r#"{"action": {"type": "DECREMENT", "value": 4}, "score": -2, "changed": true}"#)
                .unwrap();
        assert_eq!(intents, vec![ScoreIntent::decrement(4)]);
    }

    #[test]
    fn record_from_intent_omits_empty_type() {
        let record = ActionRecord::from(&ScoreIntent::from_kind("", 5));
        assert_eq!(record.kind, None);
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"value":5}"#);
    }
}
