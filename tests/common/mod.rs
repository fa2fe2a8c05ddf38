//! Shared test fixtures: a small counter store and call-counting listeners.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use statebus::store::effect;
use statebus::{Action, Listener, Reducer, Reduction};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Count {
    pub count: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountAction {
    Increment,
    Add(i64),
    Rename(String),
    /// Decrement now, increment after the delay the reducer was built with.
    Effect,
    /// Increment, then synchronously dispatch another increment from the effect.
    DoubleIncrement,
}

impl Action for CountAction {
    fn kind(&self) -> &'static str {
        match self {
            CountAction::Increment => "INCREMENT",
            CountAction::Add(_) => "ADD",
            CountAction::Rename(_) => "RENAME",
            CountAction::Effect => "EFFECT",
            CountAction::DoubleIncrement => "DOUBLE_INCREMENT",
        }
    }
}

pub fn count_reducer(delay: Duration) -> impl Reducer<Count, CountAction> {
    move |state: &Count, action: CountAction| -> Reduction<Count, CountAction> {
        match action {
            CountAction::Increment => Reduction::state(Count {
                count: state.count + 1,
                ..state.clone()
            }),
            CountAction::Add(n) => Reduction::state(Count {
                count: state.count + n,
                ..state.clone()
            }),
            CountAction::Rename(label) => Reduction::state(Count {
                label,
                ..state.clone()
            }),
            CountAction::Effect => Reduction::with_effect(
                Count {
                    count: state.count - 1,
                    ..state.clone()
                },
                move |dispatch, _| effect::dispatch_after(dispatch, delay, CountAction::Increment),
            ),
            CountAction::DoubleIncrement => Reduction::with_effect(
                Count {
                    count: state.count + 1,
                    ..state.clone()
                },
                |dispatch, _| dispatch.dispatch(CountAction::Increment),
            ),
        }
    }
}

/// Listener that counts its invocations.
pub fn counting_listener() -> (Listener, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let listener: Listener = {
        let hits = Arc::clone(&hits);
        Arc::new(move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };
    (listener, hits)
}

pub fn hits(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
