use std::collections::BTreeSet;
use std::time::Instant;

use crate::domain::browse::{BrowseIntent, BrowseState};
use crate::domain::carousel::Carousel;
use crate::domain::catalog::{category_by_slug, HERO_SLIDES};
use crate::domain::listing::{ListingId, Recommendation};
use crate::domain::pipeline;
use crate::domain::search::{validate_query, SearchError};
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, redirect_response, ResultResp};
use crate::state::AppState;
use crate::templates::{self, components::HeroVm};
use astra::Request;
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");
const LISTIFY_JS: &str = include_str!("../static/listify.js");
const PLACEHOLDER_SVG: &str = include_str!("../static/placeholder.svg");

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");

    tracing::debug!(%method, %path, "request");

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        ("GET", [""]) => home(state, "", None),
        ("GET", ["housing"]) => housing(state, query),
        ("GET", ["profile"]) => profile(state),
        ("GET", ["category", slug]) => category(state, slug),
        ("GET", ["search"]) => search(state, query),

        ("GET", ["hero"]) => hero_tick(state),
        ("POST", ["hero", "next"]) => hero_nav(state, HeroNav::Next),
        ("POST", ["hero", "prev"]) => hero_nav(state, HeroNav::Prev),
        ("POST", ["hero", "go", index]) => hero_nav(state, HeroNav::GoTo(parse_index(index)?)),

        ("POST", ["favorites", "housing", id]) => toggle_housing_favorite(state, parse_id(id)?),
        ("POST", ["favorites", "recommendations", id]) => {
            toggle_recommendation_favorite(state, parse_id(id)?)
        }

        ("GET", ["static", "main.css"]) => asset_response(&mime::TEXT_CSS_UTF_8, MAIN_CSS),
        ("GET", ["static", "listify.js"]) => {
            asset_response(&mime::APPLICATION_JAVASCRIPT_UTF_8, LISTIFY_JS)
        }
        // No photos ship with the binary; every image path gets the placeholder.
        ("GET", ["static", "img", ..]) => asset_response(&mime::IMAGE_SVG, PLACEHOLDER_SVG),

        _ => Err(ServerError::NotFound),
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}

fn parse_id(raw: &str) -> Result<ListingId, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid listing id '{raw}'")))
}

fn parse_index(raw: &str) -> Result<usize, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid slide index '{raw}'")))
}

fn home(state: &AppState, search_query: &str, search_error: Option<&SearchError>) -> ResultResp {
    let now = Instant::now();
    let hero = {
        let mut carousel = state.carousel.lock();
        carousel.tick(now);
        hero_vm(&mut carousel, now)
    };

    let vm = templates::pages::HomeVm {
        hero,
        recommendations: recommendations_with_favorites(state),
        search_query,
        search_error,
    };
    html_response(templates::pages::home_page(&vm))
}

fn housing(state: &AppState, query: &str) -> ResultResp {
    let browse = BrowseState::from_query(query);
    let result = pipeline::browse(
        &state.catalog.housing,
        &browse.criteria,
        browse.sort,
        browse.page,
    );

    tracing::debug!(
        total = result.total_count(),
        pages = result.total_pages(),
        "housing browse"
    );

    let locations = state.catalog.locations();
    let favorites: BTreeSet<ListingId> = state.housing_favorites.lock().ids().collect();

    let vm = templates::pages::HousingVm {
        state: &browse,
        result: &result,
        facets: templates::components::FacetOptions {
            locations: &locations,
            price_ceiling: state.catalog.max_housing_price(),
        },
        favorites: &favorites,
    };
    html_response(templates::pages::housing_page(&vm))
}

fn profile(state: &AppState) -> ResultResp {
    let (favorites, stale_count) = state
        .housing_favorites
        .lock()
        .resolve(&state.catalog.housing);

    let vm = templates::pages::ProfileVm {
        favorites,
        stale_count,
    };
    html_response(templates::pages::profile_page(&vm))
}

fn recommendations_with_favorites(state: &AppState) -> Vec<(&Recommendation, bool)> {
    let favorites = state.recommendation_favorites.lock();
    state
        .catalog
        .recommendations
        .iter()
        .map(|r| (r, favorites.contains(r.id)))
        .collect()
}

fn category(state: &AppState, slug: &str) -> ResultResp {
    let category = category_by_slug(slug).ok_or(ServerError::NotFound)?;

    // Recommendations are the only vehicle listings there are.
    let listings = if category.slug == "vehicles" {
        recommendations_with_favorites(state)
    } else {
        Vec::new()
    };

    html_response(templates::pages::category_page(category, &listings))
}

fn search(state: &AppState, query: &str) -> ResultResp {
    let raw = query_param(query, "q").unwrap_or_default();

    match validate_query(&raw) {
        Ok(q) => {
            let href = BrowseState::default().href_after(BrowseIntent::SetQuery(q));
            redirect_response(&href)
        }
        Err(err) => home(state, &raw, Some(&err)),
    }
}

enum HeroNav {
    Next,
    Prev,
    GoTo(usize),
}

fn hero_vm(carousel: &mut Carousel, now: Instant) -> HeroVm<'static> {
    HeroVm {
        slides: HERO_SLIDES,
        current: carousel.current(),
        progress: carousel.progress(now),
        transitioning: carousel.is_transitioning(now),
        auto_advance: carousel.is_running(),
    }
}

fn hero_fragment(state: &AppState, now: Instant) -> ResultResp {
    let vm = hero_vm(&mut state.carousel.lock(), now);
    html_response(templates::components::hero(&vm))
}

fn hero_tick(state: &AppState) -> ResultResp {
    let now = Instant::now();
    if state.carousel.lock().tick(now) {
        tracing::trace!("hero advanced");
    }
    hero_fragment(state, now)
}

fn hero_nav(state: &AppState, nav: HeroNav) -> ResultResp {
    let now = Instant::now();
    let moved = {
        let mut carousel = state.carousel.lock();
        match nav {
            HeroNav::Next => carousel.next(now),
            HeroNav::Prev => carousel.prev(now),
            HeroNav::GoTo(i) => carousel.go_to(i, now),
        }
    };
    if !moved {
        tracing::debug!("hero navigation ignored during transition");
    }
    hero_fragment(state, now)
}

fn toggle_housing_favorite(state: &AppState, id: ListingId) -> ResultResp {
    let mut ledger = state.housing_favorites.lock();

    // Unknown ids may only be removed (stale entries), never added.
    if !ledger.contains(id) && state.catalog.housing_by_id(id).is_none() {
        return Err(ServerError::NotFound);
    }

    let is_favorite = ledger.toggle(id);
    drop(ledger);

    tracing::info!(id, is_favorite, "housing favorite toggled");
    html_response(templates::components::housing_favorite_button(id, is_favorite))
}

fn toggle_recommendation_favorite(state: &AppState, id: ListingId) -> ResultResp {
    let mut ledger = state.recommendation_favorites.lock();

    if !ledger.contains(id) && state.catalog.recommendation_by_id(id).is_none() {
        return Err(ServerError::NotFound);
    }

    let is_favorite = ledger.toggle(id);
    drop(ledger);

    tracing::info!(id, is_favorite, "recommendation favorite toggled");
    html_response(templates::components::recommendation_favorite_button(id, is_favorite))
}
