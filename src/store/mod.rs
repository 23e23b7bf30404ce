//! Single-owner state container.
//!
//! `Store` owns the current state, runs the reducer for every dispatched
//! intent and notifies subscribers synchronously afterwards. The handle is
//! cheap to clone; every clone sees the same state.

mod enhancer;
mod recorder;
mod subscription;

pub use enhancer::{Enhancer, TracingEnhancer};
pub use recorder::{ActionRecorder, RecorderError};
pub use subscription::Subscription;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::ui::mvi::Reducer;
use crate::ui::score::{ScoreReducer, ScoreState};
use subscription::ListenerRegistry;

/// Store for the score counter.
pub type ScoreStore = Store<ScoreReducer>;

struct Inner<R: Reducer> {
    state: Mutex<Arc<R::State>>,
    enhancer: Option<Box<dyn Enhancer<R>>>,
}

/// Handle to the single source of truth for reducer `R`.
pub struct Store<R: Reducer> {
    inner: Arc<Inner<R>>,
    listeners: Arc<Mutex<ListenerRegistry>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store whose state starts at `seed`.
    ///
    /// `enhancer` observes every dispatch; `None` behaves as a no-op hook.
    pub fn configure(seed: R::State, enhancer: Option<Box<dyn Enhancer<R>>>) -> Self {
        if let Some(enhancer) = &enhancer {
            enhancer.on_configure(&seed);
        }
        tracing::debug!(?seed, enhanced = enhancer.is_some(), "store configured");
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(Arc::new(seed)),
                enhancer,
            }),
            listeners: Arc::new(Mutex::new(ListenerRegistry::default())),
        }
    }

    /// Current state. Readers share it; it is replaced, never edited.
    pub fn state(&self) -> Arc<R::State> {
        Arc::clone(&self.inner.state.lock())
    }

    /// Apply `intent` and notify every subscriber in registration order.
    ///
    /// Subscribers run after the state lock is released, so they may read
    /// the state or dispatch again. A panicking subscriber propagates to the
    /// caller; later subscribers are not invoked.
    pub fn dispatch(&self, intent: R::Intent) {
        let (next, changed) = {
            let mut current = self.inner.state.lock();
            if let Some(enhancer) = &self.inner.enhancer {
                enhancer.on_dispatch(&intent, &**current);
            }
            let next = R::reduce(&*current, intent);
            let changed = !Arc::ptr_eq(&*current, &next);
            *current = Arc::clone(&next);
            if let Some(enhancer) = &self.inner.enhancer {
                enhancer.on_reduced(&next, changed);
            }
            (next, changed)
        };

        tracing::trace!(state = ?next, changed, "dispatch");

        let listeners = self.listeners.lock().snapshot();
        for listener in listeners {
            listener();
        }
    }

    /// Register `listener`, invoked with no arguments after every dispatch.
    #[must_use = "dropping the subscription keeps the listener registered; call unsubscribe() to remove it"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.listeners.lock().insert(Arc::new(listener));
        Subscription::new(id, Arc::downgrade(&self.listeners))
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl ScoreStore {
    /// Store seeded with the reference score.
    pub fn seeded() -> Self {
        Self::configure(ScoreState::seed(), None)
    }

    /// Store seeded from `config`, logging transitions and recording them
    /// when `recorder.path` is set.
    pub fn from_config(config: &Config) -> Result<Self, RecorderError> {
        let mut enhancers: Vec<Box<dyn Enhancer<ScoreReducer>>> =
            vec![Box::new(TracingEnhancer)];
        if let Some(path) = &config.recorder.path {
            enhancers.push(Box::new(ActionRecorder::create(path)?));
        }
        Ok(Self::configure(
            ScoreState::new(config.store.seed),
            Some(Box::new(enhancers)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::score::ScoreIntent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn configure_uses_seed() {
        let store = ScoreStore::configure(ScoreState::new(40), None);
        assert_eq!(store.state().score, 40);
    }

    #[test]
    fn clones_share_state() {
        let store = ScoreStore::seeded();
        let other = store.clone();
        other.dispatch(ScoreIntent::increment_one());
        assert_eq!(store.state().score, 3);
    }

    #[test]
    fn listener_can_read_state_during_notification() {
        let store = ScoreStore::seeded();
        let seen = Arc::new(AtomicUsize::new(0));
        let reader = store.clone();
        let seen_in_listener = Arc::clone(&seen);
        let _sub = store.subscribe(move || {
            seen_in_listener.store(reader.state().score as usize, Ordering::SeqCst);
        });

        store.dispatch(ScoreIntent::increment(8));
        assert_eq!(seen.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn listener_can_dispatch_again() {
        let store = ScoreStore::seeded();
        let inner = store.clone();
        let _sub = store.subscribe(move || {
            if inner.state().score == 3 {
                inner.dispatch(ScoreIntent::increment_one());
            }
        });

        store.dispatch(ScoreIntent::increment_one());
        assert_eq!(store.state().score, 4);
    }
}
