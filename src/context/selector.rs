use std::sync::Arc;

use parking_lot::Mutex;

use crate::event_bus::{Listener, Subscription};
use crate::store::{Action, Store};

/// A derived value kept in sync with a store.
///
/// [`get`](Selector::get) always computes from the current state, so a value
/// read right after construction already reflects any dispatch that raced
/// with it. The `on_change` hook given at construction fires after a
/// broadcast whenever the selected value differs from the last one seen.
/// Dropping the selector unsubscribes it.
pub struct Selector<T> {
    read: Box<dyn Fn() -> Option<T> + Send + Sync>,
    subscription: Subscription,
}

impl<T> Selector<T>
where
    T: PartialEq + Send + 'static,
{
    pub(crate) fn subscribe<S, A, F, N>(store: &Arc<Store<S, A>>, selector: F, on_change: N) -> Self
    where
        S: Send + Sync + 'static,
        A: Action,
        F: Fn(&S) -> T + Send + Sync + 'static,
        N: Fn() + Send + Sync + 'static,
    {
        let selector = Arc::new(selector);
        let last_seen: Arc<Mutex<Option<T>>> = Arc::new(Mutex::new(None));

        let listener: Listener = {
            let store = Arc::downgrade(store);
            let selector = Arc::clone(&selector);
            let last_seen = Arc::clone(&last_seen);
            Arc::new(move || {
                let Some(store) = store.upgrade() else {
                    return;
                };
                // Read state under the lock so recorded values follow the
                // order of the reads, whichever broadcast finishes first.
                let changed = {
                    let mut last = last_seen.lock();
                    let next = selector(store.get_state().as_ref());
                    if last.as_ref() == Some(&next) {
                        false
                    } else {
                        *last = Some(next);
                        true
                    }
                };
                if changed {
                    on_change();
                }
            })
        };
        let subscription = store.subscribe(listener);

        // Prime after subscribing: if a broadcast already landed in between,
        // the listener has recorded the newer value and this is skipped.
        {
            let mut last = last_seen.lock();
            if last.is_none() {
                *last = Some(selector(store.get_state().as_ref()));
            }
        }

        let read = {
            let store = Arc::downgrade(store);
            move || store.upgrade().map(|store| selector(store.get_state().as_ref()))
        };

        Self {
            read: Box::new(read),
            subscription,
        }
    }

    /// Current snapshot, or `None` once the store has been unmounted.
    pub fn get(&self) -> Option<T> {
        (self.read)()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_active()
    }
}
