use crate::domain::listing::DEFAULT_IMAGE;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_db, request, test_state};
use http::Method;

#[test]
fn home_renders_hero_categories_and_recommendations() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("id=\"hero\""));
    assert!(body.contains("Find your next home"));
    assert!(body.contains("Fresh recommendations"));
    assert!(body.contains("Toyota Corolla 1.8 Hybrid"));
    assert!(body.contains("Featured"));
    assert!(body.contains("/category/electronics"));
    assert!(body.contains("Listify. All rights reserved."));
}

#[test]
fn empty_search_shows_inline_message_instead_of_navigating() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/search?q=+++"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Please enter something to search for."));
    assert!(body.contains("aria-invalid=\"true\""));
}

#[test]
fn search_redirects_to_filtered_housing() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let resp = handle(request(Method::GET, "/search?q=lake+view"), &state).unwrap();
    assert_eq!(resp.status(), 303);

    let location = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(location, "/housing?q=lake+view");
}

#[test]
fn category_pages_resolve_by_slug() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/category/vehicles"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Motorcycles"));

    let mut resp = handle(request(Method::GET, "/category/jobs"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("New jobs listings are on their way."));

    let missing = handle(request(Method::GET, "/category/spaceships"), &state);
    assert!(matches!(missing, Err(ServerError::NotFound)));
}

#[test]
fn unknown_routes_are_not_found() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    assert!(matches!(
        handle(request(Method::GET, "/admin"), &state),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        handle(request(Method::DELETE, "/housing"), &state),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn stylesheet_is_served() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let resp = handle(request(Method::GET, "/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
}

#[test]
fn see_all_vehicles_lists_every_recommendation() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/"), &state).unwrap();
    assert!(body_string(&mut resp).contains("href=\"/category/vehicles\""));

    handle(request(Method::POST, "/favorites/recommendations/4"), &state).unwrap();

    let mut resp = handle(request(Method::GET, "/category/vehicles"), &state).unwrap();
    let body = body_string(&mut resp);

    for rec in &state.catalog.recommendations {
        assert!(body.contains(&rec.title), "{} missing", rec.title);
    }
    assert!(body.contains("/favorites/recommendations/4"));
    assert_eq!(body.matches("aria-pressed=\"true\"").count(), 1);
}

#[test]
fn pages_load_scripts_locally() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    let mut resp = handle(request(Method::GET, "/housing"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("src=\"/static/listify.js\""));
    assert!(!body.contains("https://"));

    let mut resp = handle(request(Method::GET, "/static/listify.js"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("application/javascript; charset=utf-8")
    );
    assert!(body_string(&mut resp).contains("hx-post"));
}

#[test]
fn default_image_is_served() {
    let (_dir, db) = init_test_db();
    let state = test_state(db);

    for path in [DEFAULT_IMAGE, "/static/img/housing/1a.jpg", "/static/img/hero/home.jpg"] {
        let mut resp = handle(request(Method::GET, path), &state)
            .unwrap_or_else(|e| panic!("{path}: {e}"));
        assert_eq!(resp.status(), 200, "{path}");
        assert_eq!(
            resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
            Some("image/svg+xml"),
            "{path}"
        );
        assert!(body_string(&mut resp).starts_with("<svg"));
    }
}
