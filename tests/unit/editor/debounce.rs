use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn fires_once_after_quiet_window() {
    let mut d = Debouncer::new(ms(16));
    d.schedule(ms(0), "a");
    assert_eq!(d.poll(ms(15)), None);
    assert_eq!(d.poll(ms(16)), Some("a"));
    assert_eq!(d.poll(ms(100)), None);
    assert!(!d.is_pending());
}

#[test]
fn reschedule_cancels_previous_payload() {
    let mut d = Debouncer::new(ms(16));
    d.schedule(ms(0), 1);
    d.schedule(ms(10), 2);
    d.schedule(ms(20), 3);
    assert_eq!(d.due_at(), Some(ms(36)));
    assert_eq!(d.poll(ms(30)), None);
    assert_eq!(d.poll(ms(36)), Some(3));
}

#[test]
fn burst_of_changes_fires_a_single_task() {
    let mut d = Debouncer::new(ms(16));
    let mut fired = 0;
    for t in 0..10 {
        d.schedule(ms(t * 5), ());
        if d.poll(ms(t * 5)).is_some() {
            fired += 1;
        }
    }
    if d.poll(ms(1_000)).is_some() {
        fired += 1;
    }
    assert_eq!(fired, 1);
}

#[test]
fn cancel_and_flush() {
    let mut d = Debouncer::new(ms(16));
    d.schedule(ms(0), 'x');
    d.cancel();
    assert_eq!(d.poll(ms(50)), None);

    d.schedule(ms(0), 'y');
    assert_eq!(d.flush(), Some('y'));
    assert_eq!(d.flush(), None);
}
