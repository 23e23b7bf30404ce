//! Listener bookkeeping for [`Store`](super::Store).

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

pub(super) type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
pub(super) struct ListenerRegistry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

impl ListenerRegistry {
    pub(super) fn insert(&mut self, listener: Listener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Listeners in registration order, detached from the registry lock.
    pub(super) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by [`Store::subscribe`](super::Store::subscribe).
///
/// Holds only a weak reference, so it never keeps the store alive.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<ListenerRegistry>>,
}

impl Subscription {
    pub(super) fn new(id: u64, registry: Weak<Mutex<ListenerRegistry>>) -> Self {
        Self { id, registry }
    }

    /// Deregister the listener. Returns `false` if it was already removed
    /// or the store no longer exists.
    pub fn unsubscribe(&self) -> bool {
        match self.registry.upgrade() {
            Some(registry) => registry.lock().remove(self.id),
            None => false,
        }
    }
}
