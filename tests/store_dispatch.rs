mod common;

use common::{count_reducer, counting_listener, hits, Count, CountAction};
use parking_lot::Mutex;
use statebus::{Listener, Reducer, Store};
use std::sync::Arc;
use std::time::Duration;

const NO_DELAY: Duration = Duration::from_millis(0);

#[test]
fn get_state_matches_reducer_output_after_each_dispatch() {
    let reducer = count_reducer(NO_DELAY);
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let actions = vec![
        CountAction::Increment,
        CountAction::Add(5),
        CountAction::Rename("five".to_string()),
        CountAction::Add(-7),
        CountAction::Increment,
    ];

    for action in actions {
        let previous = store.get_state();
        let (expected, _) = reducer.reduce(&previous, action.clone()).into_parts();

        store.dispatch(action);

        assert_eq!(*store.get_state(), expected);
    }
}

#[test]
fn three_increments_yield_three_and_three_broadcasts() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let (listener, broadcasts) = counting_listener();
    let _sub = store.subscribe(listener);

    for _ in 0..3 {
        store.dispatch(CountAction::Increment);
    }

    assert_eq!(store.get_state().count, 3);
    assert_eq!(hits(&broadcasts), 3);
}

#[test]
fn every_listener_fires_once_per_dispatch() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let (a, a_hits) = counting_listener();
    let (b, b_hits) = counting_listener();
    let _a = store.subscribe(a);
    let _b = store.subscribe(b);

    store.dispatch(CountAction::Add(2));
    store.dispatch(CountAction::Rename("x".to_string()));

    assert_eq!(hits(&a_hits), 2);
    assert_eq!(hits(&b_hits), 2);
}

#[test]
fn unsubscribed_listener_is_not_notified() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let (gone, gone_hits) = counting_listener();
    let (kept, kept_hits) = counting_listener();
    let gone_sub = store.subscribe(gone);
    let _kept = store.subscribe(kept);

    store.dispatch(CountAction::Increment);
    gone_sub.unsubscribe();
    gone_sub.unsubscribe();
    store.dispatch(CountAction::Increment);

    assert_eq!(hits(&gone_hits), 1);
    assert_eq!(hits(&kept_hits), 2);
    assert_eq!(store.listener_count(), 1);
}

#[test]
fn listeners_see_the_updated_state() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let listener: Listener = {
        let store = Arc::downgrade(&store);
        let seen = Arc::clone(&seen);
        Arc::new(move || {
            if let Some(store) = store.upgrade() {
                seen.lock().push(store.get_state().count);
            }
        })
    };
    let _sub = store.subscribe(listener);

    store.dispatch(CountAction::Add(4));
    store.dispatch(CountAction::Increment);

    assert_eq!(*seen.lock(), vec![4, 5]);
}

#[test]
fn synchronous_nested_dispatch_broadcasts_inner_first() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let listener: Listener = {
        let store = Arc::downgrade(&store);
        let seen = Arc::clone(&seen);
        Arc::new(move || {
            if let Some(store) = store.upgrade() {
                seen.lock().push(store.get_state().count);
            }
        })
    };
    let _sub = store.subscribe(listener);

    store.dispatch(CountAction::DoubleIncrement);

    // Inner INCREMENT emits when it completes, then the outer dispatch emits
    // once its effect returns. Both observe the final state.
    assert_eq!(store.get_state().count, 2);
    assert_eq!(*seen.lock(), vec![2, 2]);
}

#[test]
fn listener_may_dispatch_again() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let listener: Listener = {
        let store = Arc::downgrade(&store);
        Arc::new(move || {
            if let Some(store) = store.upgrade() {
                if store.get_state().count == 1 {
                    store.dispatch(CountAction::Add(10));
                }
            }
        })
    };
    let _sub = store.subscribe(listener);

    store.dispatch(CountAction::Increment);

    assert_eq!(store.get_state().count, 11);
}

#[test]
fn concurrent_dispatches_are_serialized() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let (listener, broadcasts) = counting_listener();
    let _sub = store.subscribe(listener);

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let dispatch = store.dispatcher();
            std::thread::spawn(move || {
                for _ in 0..250 {
                    dispatch.dispatch(CountAction::Increment);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(store.get_state().count, 1000);
    assert_eq!(hits(&broadcasts), 1000);
}

#[test]
fn get_state_getter_tracks_store_lifetime() {
    let store = Store::new(Count::default(), count_reducer(NO_DELAY));
    let getter = store.state_getter();
    store.dispatch(CountAction::Add(3));

    assert_eq!(getter.get().map(|state| state.count), Some(3));

    drop(store);
    assert!(getter.get().is_none());
}
