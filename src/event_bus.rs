//! Listener registry used to broadcast "state changed" notifications.
//!
//! The bus knows nothing about state or actions. Listeners are identified by
//! their `Arc` pointer, so registering the same `Arc` twice is a no-op.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// Zero-argument notification callback.
pub type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Fan-out notification to a set of listeners.
#[derive(Default)]
pub struct EventBus {
    registry: Arc<Mutex<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` and return the guard that removes it.
    ///
    /// If the identical `Arc` is already registered nothing is added and the
    /// guard refers to the existing registration.
    pub fn add_listener(&self, listener: Listener) -> Subscription {
        let mut registry = self.registry.lock();
        let existing = registry
            .entries
            .iter()
            .find(|(_, registered)| Arc::ptr_eq(registered, &listener))
            .map(|(id, _)| *id);

        let id = match existing {
            Some(id) => id,
            None => {
                let id = registry.next_id;
                registry.next_id += 1;
                registry.entries.push((id, listener));
                id
            }
        };

        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Invoke every registered listener once.
    ///
    /// The listener set is snapshotted before iterating: listeners added or
    /// removed while this pass runs are only seen by the next `emit()`. No
    /// lock is held while listeners run, and a panicking listener unwinds out
    /// of `emit()` without the remaining listeners being called.
    pub fn emit(&self) {
        let listeners: Vec<Listener> = self
            .registry
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle returned by [`EventBus::add_listener`].
///
/// `unsubscribe()` removes exactly the listener it was issued for and is safe
/// to call any number of times. Dropping the guard unsubscribes as well.
#[must_use = "dropping a Subscription unsubscribes its listener"]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        // The listener is dropped after the lock is released, since its
        // captures may themselves touch the bus.
        let removed = {
            let mut registry = registry.lock();
            registry
                .entries
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| registry.entries.remove(index))
        };
        drop(removed);
    }

    /// Whether the bus still holds the listener this guard was issued for.
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry.lock().entries.iter().any(|(id, _)| *id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
