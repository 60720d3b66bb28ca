use super::*;
use std::cell::RefCell;

#[test]
fn set_replaces_value_and_bumps_version() {
    let state = SnapshotState::new(None::<u32>);
    assert_eq!(state.get(), None);
    assert_eq!(state.version(), 0);

    state.set(Some(3));
    state.set(Some(3));

    assert_eq!(state.get(), Some(3));
    assert_eq!(state.version(), 2);
}

#[test]
fn clones_share_the_same_cell() {
    let state = SnapshotState::new(1);
    let other = state.clone();
    other.set(5);
    assert_eq!(state.get(), 5);
    assert_eq!(state.with(|value| value * 2), 10);
}

#[test]
fn observers_see_every_replacement_in_order() {
    let state = SnapshotState::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _registration = {
        let seen = Rc::clone(&seen);
        state.observe(move |value| seen.borrow_mut().push(*value))
    };

    state.set(1);
    state.set(2);
    state.set(3);

    assert_eq!(*seen.borrow(), vec![1, 2, 3]);
}

#[test]
fn observer_can_read_the_state_it_observes() {
    let state = SnapshotState::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _registration = {
        let seen = Rc::clone(&seen);
        let reader = state.clone();
        state.observe(move |_| seen.borrow_mut().push(reader.get()))
    };

    state.set(7);
    assert_eq!(*seen.borrow(), vec![7]);
}

#[test]
fn dropping_or_cancelling_the_registration_stops_notifications() {
    let state = SnapshotState::new(0);
    let calls = Rc::new(RefCell::new(0));

    let dropped = {
        let calls = Rc::clone(&calls);
        state.observe(move |_| *calls.borrow_mut() += 1)
    };
    let cancelled = {
        let calls = Rc::clone(&calls);
        state.observe(move |_| *calls.borrow_mut() += 1)
    };
    assert_eq!(state.observer_count(), 2);

    drop(dropped);
    cancelled.cancel();
    state.set(1);

    assert_eq!(state.observer_count(), 0);
    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn registration_outliving_the_state_is_harmless() {
    let registration = {
        let state = SnapshotState::new(0);
        state.observe(|_| {})
    };
    drop(registration);
}

#[test]
fn observer_may_drop_its_own_registration_while_notified() {
    let state = SnapshotState::new(0);
    let calls = Rc::new(RefCell::new(0));
    let slot: Rc<RefCell<Option<ObserverRegistration>>> = Rc::default();
    let registration = {
        let calls = Rc::clone(&calls);
        let slot = Rc::clone(&slot);
        state.observe(move |_| {
            *calls.borrow_mut() += 1;
            slot.borrow_mut().take();
        })
    };
    *slot.borrow_mut() = Some(registration);

    state.set(1);
    state.set(2);

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(state.observer_count(), 0);
    assert_eq!(state.get(), 2);
}

#[test]
fn observer_cancelled_by_an_earlier_observer_is_skipped() {
    let state = SnapshotState::new(0);
    let later_calls = Rc::new(RefCell::new(0));
    let later: Rc<RefCell<Option<ObserverRegistration>>> = Rc::default();
    let _first = {
        let later = Rc::clone(&later);
        state.observe(move |_| {
            later.borrow_mut().take();
        })
    };
    *later.borrow_mut() = Some({
        let later_calls = Rc::clone(&later_calls);
        state.observe(move |_| *later_calls.borrow_mut() += 1)
    });

    state.set(1);

    assert_eq!(*later_calls.borrow(), 0);
    assert_eq!(state.observer_count(), 1);
}

#[test]
fn observer_may_replace_the_value_it_was_notified_about() {
    let state = SnapshotState::new(0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _registration = {
        let seen = Rc::clone(&seen);
        let writer = state.clone();
        state.observe(move |value| {
            seen.borrow_mut().push(*value);
            if *value == 1 {
                writer.set(2);
            }
        })
    };

    state.set(1);

    assert_eq!(*seen.borrow(), vec![1, 2]);
    assert_eq!(state.get(), 2);
    assert_eq!(state.version(), 2);
}
