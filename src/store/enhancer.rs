//! Hooks attached to a store at construction time.

use crate::ui::mvi::Reducer;

/// Observer of store transitions, attached via [`Store::configure`].
///
/// Hooks run while the store holds its state lock, so for any two
/// dispatches the `on_dispatch`/`on_reduced` pairs never interleave. Hooks
/// must not dispatch into the same store.
///
/// [`Store::configure`]: super::Store::configure
pub trait Enhancer<R: Reducer>: Send + Sync {
    /// Called once with the seed state.
    fn on_configure(&self, _seed: &R::State) {}

    /// Called before the reducer consumes `intent`.
    fn on_dispatch(&self, _intent: &R::Intent, _previous: &R::State) {}

    /// Called with the reducer output. `changed` is false when the reducer
    /// returned the previous state itself.
    fn on_reduced(&self, _next: &R::State, _changed: bool) {}
}

/// Runs several enhancers in order.
impl<R: Reducer> Enhancer<R> for Vec<Box<dyn Enhancer<R>>> {
    fn on_configure(&self, seed: &R::State) {
        for enhancer in self {
            enhancer.on_configure(seed);
        }
    }

    fn on_dispatch(&self, intent: &R::Intent, previous: &R::State) {
        for enhancer in self {
            enhancer.on_dispatch(intent, previous);
        }
    }

    fn on_reduced(&self, next: &R::State, changed: bool) {
        for enhancer in self {
            enhancer.on_reduced(next, changed);
        }
    }
}

/// Logs every transition through `tracing` at debug level.
pub struct TracingEnhancer;

impl<R: Reducer> Enhancer<R> for TracingEnhancer {
    fn on_configure(&self, seed: &R::State) {
        tracing::info!(?seed, "store seeded");
    }

    fn on_dispatch(&self, intent: &R::Intent, previous: &R::State) {
        tracing::debug!(?intent, ?previous, "dispatching");
    }

    fn on_reduced(&self, next: &R::State, changed: bool) {
        tracing::debug!(?next, changed, "reduced");
    }
}
