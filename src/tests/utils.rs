use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::domain::listing::{HousingListing, ListingKind, PropertyType};
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use tempfile::TempDir;

/// Fresh SQLite file in its own temp dir. Keep the `TempDir` alive for the test.
pub fn init_test_db() -> (TempDir, Database) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("listify_test.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    (dir, db)
}

pub fn test_state(db: Database) -> AppState {
    AppState::new(&Config::default(), db)
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().expect("valid uri");
    req
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read body");
    String::from_utf8(bytes).expect("utf-8 body")
}

/// Minimal housing listing for pipeline tests.
pub fn listing(
    id: u32,
    price: u32,
    kind: ListingKind,
    location: &str,
    bedrooms: u8,
    property_type: PropertyType,
) -> HousingListing {
    HousingListing {
        id,
        title: format!("Listing {id}"),
        description: String::new(),
        price,
        kind,
        location: location.to_string(),
        bedrooms,
        bathrooms: 1,
        area_sqft: 700,
        property_type,
        images: Vec::new(),
        posted: "Today".to_string(),
        contact_email: "owner@example.com".to_string(),
        amenities: Default::default(),
    }
}
