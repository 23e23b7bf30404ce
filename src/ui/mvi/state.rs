//! Base trait for UI state in MVI architecture.

use std::fmt::Debug;

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (reducers build a new value instead of editing in place)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
///
/// States are shared as `Arc<State>` between the store and its readers,
/// hence the `Sync` bound.
pub trait UiState: Debug + Clone + PartialEq + Default + Send + Sync + 'static {}
