use crate::domain::catalog::HERO_SLIDES;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_db, request, test_state};
use http::Method;

#[test]
fn prev_from_first_slide_shows_last_slide() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::POST, "/hero/prev"), &state).unwrap();
    let body = body_string(&mut resp);

    let last = HERO_SLIDES.last().unwrap();
    assert!(body.contains(last.title));
    assert!(body.contains("is-transitioning"));
    assert_eq!(state.carousel.lock().current(), HERO_SLIDES.len() - 1);
}

#[test]
fn overlapping_navigation_is_ignored() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    handle(request(Method::POST, "/hero/go/2"), &state).unwrap();
    handle(request(Method::POST, "/hero/next"), &state).unwrap();

    // transition is still running, so the second press is dropped
    assert_eq!(state.carousel.lock().current(), 2);
}

#[test]
fn hero_poll_renders_fragment_only() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/hero"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.starts_with("<section"));
    assert!(body.contains("hx-trigger=\"every 1s\""));
    assert!(!body.contains("<html"));
}

#[test]
fn bad_slide_index_is_a_bad_request() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    assert!(handle(request(Method::POST, "/hero/go/first"), &state).is_err());
}

#[test]
fn torn_down_carousel_stops_polling() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    state.shutdown();

    let mut resp = handle(request(Method::GET, "/hero"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(!body.contains("hx-trigger"));
    assert!(!body.contains("hx-get"));

    // manual navigation still works
    handle(request(Method::POST, "/hero/next"), &state).unwrap();
    assert_eq!(state.carousel.lock().current(), 1);
}
