//! Reducer for the score counter.

use std::sync::Arc;

use crate::ui::mvi::Reducer;

use super::intent::ScoreIntent;
use super::state::ScoreState;

/// Reducer for score transitions.
///
/// Total over every input. Arithmetic wraps on overflow so that an
/// increment followed by a decrement of the same value always restores the
/// previous score.
pub struct ScoreReducer;

impl Reducer for ScoreReducer {
    type State = ScoreState;
    type Intent = ScoreIntent;

    fn reduce(state: &Arc<Self::State>, intent: Self::Intent) -> Arc<Self::State> {
        match intent {
            ScoreIntent::Increment { value } => {
                Arc::new(state.with_score(state.score.wrapping_add(value)))
            }
            ScoreIntent::Decrement { value } => {
                Arc::new(state.with_score(state.score.wrapping_sub(value)))
            }
            ScoreIntent::Unrecognized { .. } => Arc::clone(state),
        }
    }
}
