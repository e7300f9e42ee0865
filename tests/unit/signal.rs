use super::*;

#[test]
fn set_notifies_only_on_change() {
    let s = Signal::new(0.0_f64);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    s.subscribe(move |v| sink.borrow_mut().push(*v));

    assert!(s.set(0.5));
    assert!(!s.set(0.5));
    assert!(s.set(1.0));
    assert_eq!(*seen.borrow(), vec![0.5, 1.0]);
    assert_eq!(s.get(), 1.0);
}

#[test]
fn unsubscribe_stops_notifications() {
    let s = Signal::new(false);
    let hits = Rc::new(RefCell::new(0));
    let h = Rc::clone(&hits);
    let id = s.subscribe(move |_| *h.borrow_mut() += 1);

    s.set(true);
    assert!(s.unsubscribe(id));
    assert!(!s.unsubscribe(id));
    s.set(false);
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(s.subscriber_count(), 0);
}

#[test]
fn subscribers_may_read_the_signal() {
    let s = Signal::new(1_u32);
    let reader = s.clone();
    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    s.subscribe(move |_| *sink.borrow_mut() = reader.get());
    s.set(7);
    assert_eq!(*seen.borrow(), 7);
}

#[test]
fn map_tracks_source() {
    let progress = Signal::new(0.0_f64);
    let percent = progress.map(|p| (p * 100.0).round() as u32);
    assert_eq!(percent.get(), 0);
    progress.set(0.42);
    assert_eq!(percent.get(), 42);
}

#[test]
fn update_mutates_in_place() {
    let s = Signal::new(vec![1, 2]);
    assert!(s.update(|v| v.push(3)));
    assert!(!s.update(|_| {}));
    assert_eq!(s.get(), vec![1, 2, 3]);
}

#[test]
fn subscriber_can_clamp_the_value_it_observes() {
    let s = Signal::new(0.0_f64);
    let me = s.clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    s.subscribe(move |v| {
        sink.borrow_mut().push(*v);
        if *v > 1.0 {
            me.set(1.0);
        }
    });

    let other = Rc::new(RefCell::new(Vec::new()));
    let other_sink = Rc::clone(&other);
    s.subscribe(move |v| other_sink.borrow_mut().push(*v));

    assert!(s.set(2.0));
    assert_eq!(s.get(), 1.0);
    assert_eq!(*seen.borrow(), vec![2.0, 1.0]);
    assert_eq!(*other.borrow(), vec![2.0, 1.0]);

    // The signal is usable again once notification has drained.
    assert!(s.set(0.5));
    assert_eq!(*other.borrow(), vec![2.0, 1.0, 0.5]);
}

#[test]
fn endless_write_back_stops() {
    let s = Signal::new(0_u64);
    let me = s.clone();
    s.subscribe(move |v| {
        me.set(v + 1);
    });
    assert!(s.set(1));
    assert_eq!(s.get(), 1 + MAX_NOTIFY_PASSES as u64);
    assert!(s.set(0));
}
