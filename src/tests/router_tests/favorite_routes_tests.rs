use crate::db::{KeyValueStore, SqliteStorage};
use crate::domain::favorites::HOUSING_FAVORITES_KEY;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_db, request, test_state};
use http::Method;

#[test]
fn housing_favorite_toggle_persists_across_restart() {
    let (_dir, db) = init_test_db();

    {
        let state = test_state(db.clone());
        let mut resp = handle(request(Method::POST, "/favorites/housing/5"), &state).unwrap();
        let body = body_string(&mut resp);
        assert!(body.contains("aria-pressed=\"true\""));
    }

    let stored = SqliteStorage::new(db.clone()).get(HOUSING_FAVORITES_KEY).unwrap();
    assert_eq!(stored.as_deref(), Some("[5]"));

    // a fresh state reads the ledger back at mount
    let state = test_state(db);
    assert!(state.housing_favorites.lock().contains(5));

    let mut resp = handle(request(Method::GET, "/profile"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Modern townhouse with rooftop terrace"));

    let mut resp = handle(request(Method::POST, "/favorites/housing/5"), &state).unwrap();
    assert!(body_string(&mut resp).contains("aria-pressed=\"false\""));
    assert!(!state.housing_favorites.lock().contains(5));
}

#[test]
fn unknown_listing_cannot_be_favorited() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let result = handle(request(Method::POST, "/favorites/housing/999"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(state.housing_favorites.lock().ids().count(), 0);
}

#[test]
fn stale_favorites_can_still_be_removed() {
    let (_dir, db) = init_test_db();
    SqliteStorage::new(db.clone())
        .set(HOUSING_FAVORITES_KEY, "[2,999]")
        .unwrap();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/profile"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Cozy studio with city views"));
    assert!(body.contains("1 saved listings are no longer available."));

    handle(request(Method::POST, "/favorites/housing/999"), &state).unwrap();
    assert_eq!(state.housing_favorites.lock().ids().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn recommendation_favorites_are_session_scoped() {
    let (_dir, db) = init_test_db();
    let state = test_state(db.clone());

    handle(request(Method::POST, "/favorites/recommendations/3"), &state).unwrap();
    assert!(state.recommendation_favorites.lock().contains(3));

    let restarted = test_state(db);
    assert_eq!(restarted.recommendation_favorites.lock().ids().count(), 0);
}
