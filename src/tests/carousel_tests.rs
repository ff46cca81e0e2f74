use std::time::{Duration, Instant};

use crate::domain::carousel::Carousel;

const INTERVAL: Duration = Duration::from_millis(5000);
const TRANSITION: Duration = Duration::from_millis(500);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn next_from_last_slide_wraps_to_first() {
    let t0 = Instant::now();
    let mut c = Carousel::new(8, INTERVAL, TRANSITION, t0);

    assert!(c.go_to(7, t0));
    assert_eq!(c.current(), 7);

    assert!(c.next(t0 + ms(600)));
    assert_eq!(c.current(), 0);
}

#[test]
fn prev_from_first_slide_wraps_to_last() {
    let t0 = Instant::now();
    let mut c = Carousel::new(8, INTERVAL, TRANSITION, t0);

    assert!(c.prev(t0));
    assert_eq!(c.current(), 7);
}

#[test]
fn navigation_is_blocked_while_transitioning() {
    let t0 = Instant::now();
    let mut c = Carousel::new(4, INTERVAL, TRANSITION, t0);

    assert!(c.next(t0));
    assert!(c.is_transitioning(t0));
    assert!(c.is_transitioning(t0 + ms(100)));

    assert!(!c.next(t0 + ms(100)));
    assert!(!c.prev(t0 + ms(200)));
    assert!(!c.go_to(3, t0 + ms(499)));
    assert_eq!(c.current(), 1);

    assert!(!c.is_transitioning(t0 + ms(500)));
    assert!(c.go_to(3, t0 + ms(500)));
    assert_eq!(c.current(), 3);
}

#[test]
fn go_to_wraps_index_and_ignores_current_slide() {
    let t0 = Instant::now();
    let mut c = Carousel::new(4, INTERVAL, TRANSITION, t0);

    assert!(!c.go_to(0, t0));
    assert!(c.go_to(6, t0));
    assert_eq!(c.current(), 2);
}

#[test]
fn tick_advances_after_each_interval() {
    let t0 = Instant::now();
    let mut c = Carousel::new(3, INTERVAL, TRANSITION, t0);

    assert!(!c.tick(t0 + ms(4999)));
    assert_eq!(c.current(), 0);

    assert!(c.tick(t0 + ms(5000)));
    assert_eq!(c.current(), 1);

    assert!(!c.tick(t0 + ms(9000)));
    assert!(c.tick(t0 + ms(10_000)));
    assert!(c.tick(t0 + ms(15_000)));
    assert_eq!(c.current(), 0);
}

#[test]
fn manual_navigation_restarts_the_interval() {
    let t0 = Instant::now();
    let mut c = Carousel::new(5, INTERVAL, TRANSITION, t0);

    assert!(c.next(t0 + ms(4000)));
    assert!(!c.tick(t0 + ms(5000)));
    assert_eq!(c.current(), 1);

    assert!(c.tick(t0 + ms(9000)));
    assert_eq!(c.current(), 2);
}

#[test]
fn progress_tracks_elapsed_fraction() {
    let t0 = Instant::now();
    let c = Carousel::new(3, INTERVAL, TRANSITION, t0);

    assert_eq!(c.progress(t0), 0.0);
    assert!((c.progress(t0 + ms(2500)) - 0.5).abs() < 1e-3);
    assert_eq!(c.progress(t0 + ms(60_000)), 1.0);
}

#[test]
fn teardown_cancels_the_timer() {
    let t0 = Instant::now();
    let mut c = Carousel::new(3, INTERVAL, TRANSITION, t0);
    assert!(c.is_running());

    c.teardown();

    assert!(!c.is_running());
    assert!(!c.tick(t0 + ms(20_000)));
    assert_eq!(c.current(), 0);
    assert_eq!(c.progress(t0 + ms(1000)), 0.0);
}

#[test]
fn empty_carousel_is_inert() {
    let t0 = Instant::now();
    let mut c = Carousel::new(0, INTERVAL, TRANSITION, t0);

    assert!(!c.is_running());
    assert!(!c.next(t0));
    assert!(!c.prev(t0));
    assert!(!c.go_to(2, t0));
    assert!(!c.tick(t0 + ms(10_000)));
    assert_eq!(c.current(), 0);
    assert_eq!(c.progress(t0 + ms(1000)), 0.0);
}
