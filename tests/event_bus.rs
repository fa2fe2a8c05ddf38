mod common;

use common::{counting_listener, hits};
use statebus::{EventBus, Listener};
use std::sync::Arc;

#[test]
fn emit_notifies_every_listener_once() {
    let bus = EventBus::new();
    let (a, a_hits) = counting_listener();
    let (b, b_hits) = counting_listener();
    let _a = bus.add_listener(a);
    let _b = bus.add_listener(b);

    bus.emit();

    assert_eq!(hits(&a_hits), 1);
    assert_eq!(hits(&b_hits), 1);
}

#[test]
fn duplicate_registration_is_a_no_op() {
    let bus = EventBus::new();
    let (listener, listener_hits) = counting_listener();
    let _first = bus.add_listener(Arc::clone(&listener));
    let _second = bus.add_listener(Arc::clone(&listener));

    assert_eq!(bus.len(), 1);
    bus.emit();
    assert_eq!(hits(&listener_hits), 1);
}

#[test]
fn equal_closures_behind_different_arcs_are_distinct() {
    let bus = EventBus::new();
    let make = || -> Listener { Arc::new(|| {}) };
    let _a = bus.add_listener(make());
    let _b = bus.add_listener(make());

    assert_eq!(bus.len(), 2);
}

#[test]
fn unsubscribe_stops_notifications() {
    let bus = EventBus::new();
    let (listener, listener_hits) = counting_listener();
    let sub = bus.add_listener(listener);

    bus.emit();
    sub.unsubscribe();
    bus.emit();

    assert_eq!(hits(&listener_hits), 1);
    assert!(!sub.is_active());
    assert!(bus.is_empty());
}

#[test]
fn double_unsubscribe_leaves_other_listeners_alone() {
    let bus = EventBus::new();
    let (gone, gone_hits) = counting_listener();
    let (kept, kept_hits) = counting_listener();
    let gone_sub = bus.add_listener(gone);
    let kept_sub = bus.add_listener(kept);

    gone_sub.unsubscribe();
    gone_sub.unsubscribe();
    bus.emit();

    assert_eq!(hits(&gone_hits), 0);
    assert_eq!(hits(&kept_hits), 1);
    assert!(kept_sub.is_active());
}

#[test]
fn dropping_subscription_unsubscribes() {
    let bus = EventBus::new();
    let (listener, listener_hits) = counting_listener();
    {
        let _sub = bus.add_listener(listener);
        bus.emit();
    }
    bus.emit();

    assert_eq!(hits(&listener_hits), 1);
    assert!(bus.is_empty());
}

#[test]
fn emit_without_listeners_is_fine() {
    let bus = EventBus::new();
    bus.emit();
    assert!(bus.is_empty());
}

#[test]
fn panicking_listener_aborts_the_rest_of_the_pass() {
    let bus = EventBus::new();
    let panicking: Listener = Arc::new(|| panic!("listener failed"));
    let (after, after_hits) = counting_listener();
    let _p = bus.add_listener(panicking);
    let _a = bus.add_listener(after);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| bus.emit()));

    assert!(result.is_err());
    assert_eq!(hits(&after_hits), 0);
    // The bus stays usable afterwards.
    assert_eq!(bus.len(), 2);
}
