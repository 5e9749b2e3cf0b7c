use super::TransitionGuard;
use std::time::Duration;

#[test]
fn test_second_begin_is_refused() {
    let mut guard = TransitionGuard::default();
    assert_eq!(guard.duration(), Duration::from_millis(300));
    assert!(guard.try_begin());
    assert!(guard.in_flight());
    assert!(!guard.try_begin());
    assert!(guard.in_flight());
}

#[test]
fn test_end_releases() {
    let mut guard = TransitionGuard::new(Duration::from_millis(10));
    assert!(guard.try_begin());
    guard.end();
    assert!(!guard.in_flight());
    assert!(guard.try_begin());
}
