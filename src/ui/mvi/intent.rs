//! Base trait for intents (user/system actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses, button clicks)
/// - Replayed actions decoded from an action record file
///
/// Intents are moved into a reducer and consumed exactly once.
pub trait Intent: Debug + Send + 'static {}
