//! Store teardown signalling.
//!
//! Every store owns a [`TeardownCoordinator`]. Deferred effects hold a
//! [`TeardownHandle`] and stop waiting on timers or network calls once the
//! store that scheduled them is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct TeardownCoordinator {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TeardownCoordinator {
    pub fn new() -> Self {
        Self {
            torn_down: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Mark the owner as torn down and wake every waiting handle.
    pub fn signal(&self) {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    pub fn handle(&self) -> TeardownHandle {
        TeardownHandle {
            torn_down: Arc::clone(&self.torn_down),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for TeardownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable view of a coordinator, handed to effects.
#[derive(Clone)]
pub struct TeardownHandle {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TeardownHandle {
    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Resolve once the owner is torn down.
    pub async fn wait(&self) {
        // Register interest before reading the flag, otherwise a signal
        // landing between the two would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_torn_down() {
            return;
        }
        notified.await;
    }
}
