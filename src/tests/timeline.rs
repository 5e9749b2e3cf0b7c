use super::{TimerEvent, Timeline};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_events_fire_when_due() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(300), TimerEvent::TransitionEnd);

    assert!(timeline.advance(ms(299)).is_empty());
    assert_eq!(timeline.advance(ms(1)), vec![TimerEvent::TransitionEnd]);
    assert_eq!(timeline.pending(), 0);
    assert_eq!(timeline.now(), ms(300));
}

#[test]
fn test_events_come_back_in_deadline_order() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(800), TimerEvent::ExpansionEnd);
    timeline.schedule(ms(300), TimerEvent::TransitionEnd);

    assert_eq!(
        timeline.advance(ms(1000)),
        vec![TimerEvent::TransitionEnd, TimerEvent::ExpansionEnd]
    );
}

#[test]
fn test_equal_deadlines_keep_schedule_order() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(100), TimerEvent::ExpansionEnd);
    timeline.schedule(ms(100), TimerEvent::TransitionEnd);

    assert_eq!(
        timeline.advance(ms(100)),
        vec![TimerEvent::ExpansionEnd, TimerEvent::TransitionEnd]
    );
}

#[test]
fn test_next_due_counts_from_now() {
    let mut timeline = Timeline::new();
    assert_eq!(timeline.next_due(), None);
    timeline.schedule(ms(300), TimerEvent::TransitionEnd);
    let _ = timeline.advance(ms(120));
    assert_eq!(timeline.next_due(), Some(ms(180)));
}

#[test]
fn test_clear_drops_pending_but_keeps_time() {
    let mut timeline = Timeline::new();
    timeline.schedule(ms(300), TimerEvent::TransitionEnd);
    let _ = timeline.advance(ms(50));
    timeline.clear();
    assert!(timeline.advance(ms(1000)).is_empty());
    assert_eq!(timeline.now(), ms(1050));
}
