//! Effects and helpers for deferred work.
//!
//! An effect runs once, inline, right after the state it was returned with is
//! installed. Anything slower than that (timers, network) has to be spawned;
//! the helpers here spawn onto the current tokio runtime and give up as soon
//! as the owning store is torn down.

use std::future::Future;
use std::thread;
use std::time::Duration;

use tokio::runtime::Handle;

use super::action::Action;
use super::dispatch::{Dispatch, GetState};
use crate::error::StoreError;

/// One-shot side computation returned by a reducer.
pub type Effect<S, A> = Box<dyn FnOnce(Dispatch<S, A>, GetState<S, A>) + Send>;

/// Dispatch `action` after `delay`.
///
/// Cancelled if the store is dropped first. Outside a tokio runtime the wait
/// happens on a plain thread, where the late dispatch becomes a no-op instead.
pub fn dispatch_after<S, A>(dispatch: Dispatch<S, A>, delay: Duration, action: A)
where
    S: Send + Sync + 'static,
    A: Action,
{
    match Handle::try_current() {
        Ok(runtime) => {
            let teardown = dispatch.teardown();
            runtime.spawn(async move {
                tokio::select! {
                    _ = teardown.wait() => {
                        tracing::debug!(action = action.kind(), "Delayed dispatch cancelled by store teardown");
                    }
                    _ = tokio::time::sleep(delay) => dispatch.dispatch(action),
                }
            });
        }
        Err(_) => {
            thread::spawn(move || {
                thread::sleep(delay);
                dispatch.dispatch(action);
            });
        }
    }
}

/// Spawn an async task that may dispatch follow-up actions.
///
/// The task is dropped mid-flight when the store is torn down.
///
/// # Errors
/// [`StoreError::NoRuntime`] when called outside a tokio runtime; `task` is
/// never run in that case.
pub fn spawn<S, A, F, Fut>(dispatch: Dispatch<S, A>, task: F) -> Result<(), StoreError>
where
    S: Send + Sync + 'static,
    A: Action,
    F: FnOnce(Dispatch<S, A>) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let Ok(runtime) = Handle::try_current() else {
        tracing::warn!("No tokio runtime available, effect task discarded");
        return Err(StoreError::NoRuntime);
    };

    let teardown = dispatch.teardown();
    let work = task(dispatch);
    runtime.spawn(async move {
        tokio::select! {
            _ = teardown.wait() => tracing::debug!("Effect task cancelled by store teardown"),
            _ = work => {}
        }
    });
    Ok(())
}
