//! Events flowing from a document through the tracker into snapshots.

use mousekit_core::{
    Coordinate2D, MouseButtons, MouseEventKind, MouseEvents, MouseState, MouseTracker, MouseWheel,
    PartialMouseEvents, DOM_DELTA_LINE,
};
use mousekit_testing::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn snapshot_is_absent_before_the_first_event() {
    for options in [
        None,
        Some(PartialMouseEvents::default()),
        Some(PartialMouseEvents::from(MouseEvents::only(&[MouseEventKind::Wheel]))),
    ] {
        let document = FakeDocument::new();
        let mut tracker = MouseTracker::new(Some(document));
        assert_eq!(tracker.render(options), None);
        assert_eq!(tracker.snapshot(), None);
    }
}

#[test]
fn press_only_configuration_reports_the_press() {
    let document = FakeDocument::new();
    let mut tracker = MouseTracker::new(Some(document.clone()));
    let options = Some(PartialMouseEvents {
        mousedown: Some(true),
        mouseup: Some(false),
        mousemove: Some(false),
        wheel: Some(false),
    });
    tracker.render(options);

    let delivered = document.dispatch(
        &MouseEventBuilder::press()
            .client(111.0, 222.0)
            .buttons(3)
            .alt_key(true)
            .build(),
    );
    let state = tracker.render(options).expect("press observed");

    assert_eq!(delivered, 1);
    assert_eq!(state.position.client, Coordinate2D::new(111.0, 222.0));
    assert_eq!(
        state.buttons,
        MouseButtons {
            left: true,
            right: true,
            middle: false
        }
    );
    assert!(state.keyboard.alt);
    assert!(!state.keyboard.ctrl && !state.keyboard.meta && !state.keyboard.shift);
    assert_eq!(state.wheel, MouseWheel::ABSENT);
}

#[test]
fn events_of_unobserved_kinds_leave_the_snapshot_untouched() {
    let document = FakeDocument::new();
    let mut tracker = MouseTracker::new(Some(document.clone()));
    tracker.render(Some(PartialMouseEvents::from(MouseEvents::only(&[
        MouseEventKind::MouseUp,
    ]))));

    assert_eq!(document.dispatch(&MouseEventBuilder::moved().at(5.0, 5.0).build()), 0);
    assert_eq!(document.dispatch(&MouseEventBuilder::press().buttons(1).build()), 0);
    assert_eq!(tracker.snapshot(), None);

    document.dispatch(&MouseEventBuilder::release().at(9.0, 8.0).build());
    assert_eq!(
        tracker.snapshot().map(|state| state.position.page),
        Some(Coordinate2D::new(9.0, 8.0))
    );
}

#[test]
fn observers_see_one_snapshot_per_event_in_delivery_order() {
    let document = FakeDocument::new();
    let mut tracker = MouseTracker::new(Some(document.clone()));
    tracker.render(None);
    let seen: Rc<RefCell<Vec<MouseState>>> = Rc::default();
    let _registration = {
        let seen = Rc::clone(&seen);
        tracker.state().observe(move |state| {
            if let Some(state) = state {
                seen.borrow_mut().push(*state);
            }
        })
    };

    let first = MouseEventBuilder::moved().at(1.0, 1.0).movement(1.0, 1.0).build();
    let second = MouseEventBuilder::moved().at(4.0, 3.0).movement(3.0, 2.0).buttons(4).build();
    document.dispatch(&first);
    document.dispatch(&second);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], mousekit_core::normalize(&first));
    assert_eq!(seen[1], mousekit_core::normalize(&second));
    assert_eq!(tracker.state().version(), 2);
}

#[test]
fn each_event_replaces_the_snapshot_without_merging() {
    let document = FakeDocument::new();
    let mut tracker = MouseTracker::new(Some(document.clone()));
    tracker.render(None);

    document.dispatch(&MouseEventBuilder::wheel().delta(0.0, 120.0, 0.0).shift_key(true).build());
    let scrolled = tracker.snapshot().expect("wheel observed");
    assert_eq!(scrolled.wheel.down, Some(true));
    assert!(scrolled.keyboard.shift);

    document.dispatch(&MouseEventBuilder::moved().at(2.0, 2.0).build());
    let moved = tracker.snapshot().expect("move observed");
    assert_eq!(moved.wheel, MouseWheel::ABSENT);
    assert!(!moved.keyboard.shift);
}

#[test]
fn wheel_event_with_partial_deltas_reports_per_axis_presence() {
    let document = FakeDocument::new();
    let mut tracker = MouseTracker::new(Some(document.clone()));
    tracker.render(None);

    document.dispatch(
        &MouseEventBuilder::wheel()
            .delta_x(Some(-11.0))
            .delta_y(None)
            .delta_z(Some(0.0))
            .delta_mode(Some(DOM_DELTA_LINE))
            .build(),
    );
    let wheel = tracker.snapshot().expect("wheel observed").wheel;

    assert_eq!(wheel.delta_x, Some(-11.0));
    assert_eq!((wheel.left, wheel.right), (Some(true), Some(false)));
    assert_eq!(wheel.delta_y, None);
    assert_eq!((wheel.up, wheel.down), (None, None));
    assert_eq!((wheel.out, wheel.r#in), (Some(false), Some(false)));
    assert_eq!(wheel.delta_mode, Some(DOM_DELTA_LINE));
}

#[test]
fn last_snapshot_survives_teardown_but_no_further_events_arrive() {
    let document = FakeDocument::new();
    let mut tracker = MouseTracker::new(Some(document.clone()));
    tracker.render(None);
    document.dispatch(&MouseEventBuilder::press().buttons(1).build());

    tracker.dispose();
    document.dispatch(&MouseEventBuilder::press().buttons(2).build());

    let state = tracker.snapshot().expect("press observed before teardown");
    assert!(state.buttons.left);
    assert!(!state.buttons.right);
}

#[test]
fn missing_document_keeps_the_snapshot_absent_forever() {
    let mut tracker: MouseTracker<FakeDocument> = MouseTracker::new(None);

    assert_eq!(tracker.render(None), None);
    assert!(tracker.registered_kinds().is_empty());
    assert_eq!(tracker.render(Some(PartialMouseEvents::default())), None);
    tracker.dispose();
    assert_eq!(tracker.snapshot(), None);
}

#[test]
fn observer_that_triggers_another_event_sees_both_snapshots() {
    let document = FakeDocument::new();
    let mut tracker = MouseTracker::new(Some(document.clone()));
    tracker.render(None);
    let seen: Rc<RefCell<Vec<Coordinate2D>>> = Rc::default();
    let follow_up_sent = Rc::new(Cell::new(false));
    let _registration = {
        let seen = Rc::clone(&seen);
        let follow_up_sent = Rc::clone(&follow_up_sent);
        let document = document.clone();
        tracker.state().observe(move |state| {
            if let Some(state) = state {
                seen.borrow_mut().push(state.position.client);
            }
            if !follow_up_sent.replace(true) {
                document.dispatch(&MouseEventBuilder::moved().at(7.0, 7.0).build());
            }
        })
    };

    document.dispatch(&MouseEventBuilder::press().at(1.0, 1.0).buttons(1).build());

    assert_eq!(
        *seen.borrow(),
        vec![Coordinate2D::new(1.0, 1.0), Coordinate2D::new(7.0, 7.0)]
    );
    assert_eq!(tracker.state().version(), 2);
    assert_eq!(
        tracker.snapshot().map(|state| state.position.client),
        Some(Coordinate2D::new(7.0, 7.0))
    );
}
