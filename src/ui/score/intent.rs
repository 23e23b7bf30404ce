//! Intents for the score counter.

use crate::ui::mvi::Intent;

/// Wire tag of [`ScoreIntent::Increment`].
pub const INCREMENT: &str = "INCREMENT";
/// Wire tag of [`ScoreIntent::Decrement`].
pub const DECREMENT: &str = "DECREMENT";

/// Intents that can be dispatched to the score reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreIntent {
    /// Add `value` to the score.
    Increment { value: i64 },

    /// Subtract `value` from the score.
    Decrement { value: i64 },

    /// An action whose type tag is neither `INCREMENT` nor `DECREMENT`.
    /// Only produced by decoding external action records; always a no-op.
    Unrecognized { kind: String, value: i64 },
}

impl Intent for ScoreIntent {}

impl ScoreIntent {
    pub fn increment(value: i64) -> Self {
        Self::Increment { value }
    }

    pub fn decrement(value: i64) -> Self {
        Self::Decrement { value }
    }

    /// Magnitude-1 increment, what the `+` control dispatches.
    pub fn increment_one() -> Self {
        Self::increment(1)
    }

    /// Magnitude-1 decrement, what the `-` control dispatches.
    pub fn decrement_one() -> Self {
        Self::decrement(1)
    }

    /// Build an intent from a wire tag. Unknown tags map to `Unrecognized`.
    pub fn from_kind(kind: &str, value: i64) -> Self {
        match kind {
            INCREMENT => Self::Increment { value },
            DECREMENT => Self::Decrement { value },
            other => Self::Unrecognized {
                kind: other.to_string(),
                value,
            },
        }
    }

    /// Wire tag of this intent.
    pub fn kind(&self) -> &str {
        match self {
            Self::Increment { .. } => INCREMENT,
            Self::Decrement { .. } => DECREMENT,
            Self::Unrecognized { kind, .. } => kind.as_str(),
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Self::Increment { value }
            | Self::Decrement { value }
            | Self::Unrecognized { value, .. } => *value,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized { .. })
    }
}
