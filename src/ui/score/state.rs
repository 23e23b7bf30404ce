//! State for the score counter.

use crate::ui::mvi::UiState;

/// Score a freshly configured store starts from.
pub const SEED_SCORE: i64 = 2;

/// The single source of truth rendered by the view.
///
/// `Default` is the empty record (score 0); stores are normally seeded with
/// [`ScoreState::seed`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreState {
    pub score: i64,
}

impl UiState for ScoreState {}

impl ScoreState {
    pub fn new(score: i64) -> Self {
        Self { score }
    }

    pub fn seed() -> Self {
        Self::new(SEED_SCORE)
    }

    /// Copy of this state with `score` replaced; every other field is kept.
    pub fn with_score(&self, score: i64) -> Self {
        let mut next = *self;
        next.score = score;
        next
    }
}
