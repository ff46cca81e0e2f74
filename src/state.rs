use parking_lot::Mutex;
use std::time::Instant;

use crate::config::Config;
use crate::db::{Database, MemoryStorage, SqliteStorage};
use crate::domain::carousel::Carousel;
use crate::domain::catalog::{Catalog, HERO_SLIDES};
use crate::domain::favorites::{FavoritesLedger, HOUSING_FAVORITES_KEY};

const RECOMMENDATION_FAVORITES_KEY: &str = "listify.recommendation-favorites";

/// Everything a request handler may read or change. Built once in `main`
/// and passed to the router by reference.
pub struct AppState {
    pub catalog: Catalog,
    pub carousel: Mutex<Carousel>,
    /// Persisted in local storage.
    pub housing_favorites: Mutex<FavoritesLedger<SqliteStorage>>,
    /// Session-scoped; gone on restart.
    pub recommendation_favorites: Mutex<FavoritesLedger<MemoryStorage>>,
}

impl AppState {
    pub fn new(config: &Config, db: Database) -> Self {
        let carousel = Carousel::new(
            HERO_SLIDES.len(),
            config.carousel_interval,
            config.carousel_transition,
            Instant::now(),
        );

        Self {
            catalog: Catalog::sample(),
            carousel: Mutex::new(carousel),
            housing_favorites: Mutex::new(FavoritesLedger::load(
                SqliteStorage::new(db),
                HOUSING_FAVORITES_KEY,
            )),
            recommendation_favorites: Mutex::new(FavoritesLedger::load(
                MemoryStorage::new(),
                RECOMMENDATION_FAVORITES_KEY,
            )),
        }
    }

    /// Stop the carousel timer before the state goes away.
    pub fn shutdown(&self) {
        self.carousel.lock().teardown();
    }
}
