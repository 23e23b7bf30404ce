mod intent;
mod reducer;
mod state;

pub use intent::{ScoreIntent, DECREMENT, INCREMENT};
pub use reducer::ScoreReducer;
pub use state::{ScoreState, SEED_SCORE};
