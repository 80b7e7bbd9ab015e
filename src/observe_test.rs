use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording() -> (Rc<RefCell<Vec<(i32, i32)>>>, impl FnMut(&i32, &i32) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |old: &i32, new: &i32| sink.borrow_mut().push((*old, *new)))
}

#[test]
fn new_holds_initial_value_without_listener() {
    let value = Observable::new(3);
    assert_eq!(*value.get(), 3);
    assert!(!value.has_listener());
}

#[test]
fn set_to_different_value_notifies_with_old_and_new() {
    let (log, listener) = recording();
    let mut value = Observable::new(1);
    value.subscribe(listener);

    assert!(value.set(2));
    assert_eq!(*value.get(), 2);
    assert_eq!(*log.borrow(), vec![(1, 2)]);
}

#[test]
fn set_to_equal_value_is_silent() {
    let (log, listener) = recording();
    let mut value = Observable::new(5);
    value.subscribe(listener);

    assert!(!value.set(5));
    assert!(!value.set(5));
    assert!(log.borrow().is_empty());
}

#[test]
fn listener_fires_once_per_change() {
    let (log, listener) = recording();
    let mut value = Observable::new(0);
    value.subscribe(listener);

    for next in [1, 1, 2, 2, 2, 0] {
        value.set(next);
    }
    assert_eq!(*log.borrow(), vec![(0, 1), (1, 2), (2, 0)]);
}

#[test]
fn subscribe_replaces_previous_listener() {
    let (first, first_listener) = recording();
    let (second, second_listener) = recording();
    let mut value = Observable::new(0);
    value.subscribe(first_listener);
    value.subscribe(second_listener);

    value.set(9);
    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), vec![(0, 9)]);
}

#[test]
fn unsubscribe_stops_notifications_but_keeps_updating() {
    let (log, listener) = recording();
    let mut value = Observable::new(0);
    value.subscribe(listener);
    value.unsubscribe();

    assert!(value.set(4));
    assert_eq!(*value.get(), 4);
    assert!(log.borrow().is_empty());
}

#[test]
fn update_derives_from_current_value() {
    let mut value = Observable::new(10);
    assert!(value.update(|v| v + 1));
    assert_eq!(*value.get(), 11);
    assert!(!value.update(|v| *v));
}

#[test]
fn debug_reports_listener_presence() {
    let mut value = Observable::new(1);
    value.subscribe(|_, _| {});
    let rendered = format!("{value:?}");
    assert!(rendered.contains("listener: true"));
}
