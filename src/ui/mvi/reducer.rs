//! Reducer trait for MVI architecture.

use std::sync::Arc;

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// A transition returns a freshly allocated `Arc`. An intent that leaves
    /// the state untouched must return `Arc::clone(state)`, so callers can
    /// detect "nothing changed" with `Arc::ptr_eq`.
    fn reduce(state: &Arc<Self::State>, intent: Self::Intent) -> Arc<Self::State>;
}
