use super::*;

#[test]
fn press_and_release_cycle() {
    let mut s = PointerState::default();
    assert!(!s.is_pressing());
    s.press();
    assert!(s.is_pressing());
    assert_eq!(s.last_position(), None);
    s.track(Point::new(1.0, 2.0));
    assert_eq!(s.last_position(), Some(Point::new(1.0, 2.0)));
    s.release();
    assert_eq!(s, PointerState::Idle);
    assert_eq!(s.last_position(), None);
}

#[test]
fn idle_ignores_tracking() {
    let mut s = PointerState::Idle;
    s.track(Point::new(5.0, 5.0));
    assert_eq!(s, PointerState::Idle);
}

#[test]
fn repeated_press_keeps_first_track() {
    let mut s = PointerState::Idle;
    s.press();
    s.track(Point::new(9.0, 9.0));
    s.press();
    assert_eq!(s.last_position(), Some(Point::new(9.0, 9.0)));
}
