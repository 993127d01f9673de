use std::{cell::RefCell, rc::Rc};

use super::*;

#[test]
fn update_clamps_and_guards_zero_height() {
    let mut t = ScrollProgressTracker::new();
    assert_eq!(t.update(5_000.0, 1_000.0), Progress::END);
    assert_eq!(t.update(-10.0, 1_000.0), Progress::START);
    assert_eq!(t.update(300.0, 0.0), Progress::START);
    assert_eq!(t.update(500.0, 1_000.0).get(), 0.5);
    assert_eq!(t.progress().get(), 0.5);
}

#[test]
fn every_update_reaches_every_subscriber() {
    let mut t = ScrollProgressTracker::new();
    let seen_a = Rc::new(RefCell::new(Vec::new()));
    let seen_b = Rc::new(RefCell::new(Vec::new()));
    let a = Rc::clone(&seen_a);
    let b = Rc::clone(&seen_b);
    t.subscribe(move |p| a.borrow_mut().push(p.get()));
    t.subscribe(move |p| b.borrow_mut().push(p.get()));

    for offset in [0.0, 100.0, 100.0, 50.0] {
        t.update(offset, 200.0);
    }

    assert_eq!(*seen_a.borrow(), vec![0.0, 0.5, 0.5, 0.25]);
    assert_eq!(*seen_a.borrow(), *seen_b.borrow());
}

#[test]
fn subscribers_run_in_subscription_order() {
    let mut t = ScrollProgressTracker::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for tag in 0..3 {
        let order = Rc::clone(&order);
        t.subscribe(move |_| order.borrow_mut().push(tag));
    }
    t.update(1.0, 2.0);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn unsubscribed_callbacks_stop_firing() {
    let mut t = ScrollProgressTracker::new();
    let hits = Rc::new(RefCell::new(0u32));
    let h = Rc::clone(&hits);
    let id = t.subscribe(move |_| *h.borrow_mut() += 1);

    t.update(1.0, 10.0);
    assert!(t.unsubscribe(id));
    assert!(!t.unsubscribe(id));
    t.update(2.0, 10.0);

    assert_eq!(*hits.borrow(), 1);
    assert_eq!(t.subscriber_count(), 0);
}

#[test]
fn unsubscribe_all_reports_count() {
    let mut t = ScrollProgressTracker::new();
    t.subscribe(|_| {});
    t.subscribe(|_| {});
    assert_eq!(t.unsubscribe_all(), 2);
    assert_eq!(t.subscriber_count(), 0);
}

#[test]
fn geometry_maps_document_scroll() {
    let g = ScrollGeometry {
        container_top: 100.0,
        container_height: 6_000.0,
        viewport_height: 1_000.0,
    };
    assert_eq!(g.scrollable_height(), 5_000.0);
    assert_eq!(g.progress(0.0), Progress::START);
    assert_eq!(g.progress(100.0), Progress::START);
    assert_eq!(g.progress(2_600.0).get(), 0.5);
    assert_eq!(g.progress(9_000.0), Progress::END);
}

#[test]
fn geometry_shorter_than_viewport_is_pinned_to_start() {
    let g = ScrollGeometry {
        container_top: 0.0,
        container_height: 600.0,
        viewport_height: 900.0,
    };
    assert_eq!(g.scrollable_height(), 0.0);
    let mut t = ScrollProgressTracker::new();
    assert_eq!(t.update_scroll_y(&g, 400.0), Progress::START);
}
