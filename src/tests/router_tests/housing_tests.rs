use crate::router::handle;
use crate::tests::utils::{body_string, init_test_db, request, test_state};
use http::Method;

#[test]
fn housing_shows_first_page_of_newest_listings() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/housing"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("<strong>15</strong> listings found"));
    // newest (id 15) is on page 1, oldest (id 1) is pushed to page 2
    assert!(body.contains("listing-15"));
    assert!(!body.contains("id=\"listing-1\""));
    assert!(body.contains("aria-current=\"page\""));
}

#[test]
fn housing_applies_filters_from_the_query() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(
        request(Method::GET, "/housing?kind=rent&max_price=1500&sort=price-low"),
        &state,
    )
    .unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("<strong>5</strong> listings found"));
    assert!(body.contains("Cozy studio with city views"));
    assert!(!body.contains("Family house with large garden"));

    let studio = body.find("Cozy studio with city views").unwrap();
    let apartment = body.find("Sunny 2BR apartment near the park").unwrap();
    assert!(studio < apartment, "price-low should list $980 before $1,450");
}

#[test]
fn housing_page_two_holds_the_remainder() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/housing?page=2"), &state).unwrap();
    let body = body_string(&mut resp);

    assert_eq!(body.matches("class=\"listing-card\"").count(), 7);
    assert!(body.contains("id=\"listing-1\""));
}

#[test]
fn no_matches_render_empty_state_with_reset_link() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/housing?q=atlantis"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("No results"));
    assert!(body.contains("Reset filters"));
    assert!(!body.contains("class=\"pagination\""));
}

#[test]
fn filter_intent_in_query_resets_to_first_page() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(
        request(Method::GET, "/housing?page=2&op=beds&value=4%2B"),
        &state,
    )
    .unwrap();
    let body = body_string(&mut resp);

    // 4+ bedrooms: ids 3, 6, 8, 12
    assert!(body.contains("<strong>4</strong> listings found"));
    assert!(body.contains("id=\"listing-12\""));
    assert!(!body.contains("id=\"listing-9\""));
}

#[test]
fn fractional_price_cap_keeps_filtering() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(
        request(Method::GET, "/housing?kind=rent&max_price=1500.5"),
        &state,
    )
    .unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("<strong>5</strong> listings found"));
    assert!(!body.contains("id=\"listing-15\""));
    assert!(body.contains("value=\"1500\""));
}
