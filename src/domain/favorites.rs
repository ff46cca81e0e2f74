use std::collections::BTreeSet;

use crate::db::KeyValueStore;
use crate::domain::listing::{HousingListing, ListingId};

/// Storage key holding the housing favorites.
pub const HOUSING_FAVORITES_KEY: &str = "listify.favorites";

/// The set of listing ids a user has marked favorite.
///
/// The whole set is written back on every toggle. Ids are not checked
/// against the catalog; stale ids stay until the user toggles them off.
pub struct FavoritesLedger<S: KeyValueStore> {
    store: S,
    key: String,
    ids: BTreeSet<ListingId>,
}

impl<S: KeyValueStore> FavoritesLedger<S> {
    /// Read the persisted set. A missing, unreadable or corrupt value yields an empty ledger.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let ids = match store.get(&key) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<ListingId>>(&raw)
                .map(|ids| ids.into_iter().collect())
                .unwrap_or_else(|e| {
                    tracing::warn!(%key, error = %e, "discarding corrupt favorites");
                    BTreeSet::new()
                }),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "favorites unavailable, starting empty");
                BTreeSet::new()
            }
        };

        tracing::debug!(%key, count = ids.len(), "favorites loaded");
        Self { store, key, ids }
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present. Returns whether it is now a favorite.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        let now_favorite = if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        };
        self.persist();
        now_favorite
    }

    pub fn ids(&self) -> impl Iterator<Item = ListingId> + '_ {
        self.ids.iter().copied()
    }

    /// Favorites that still exist in `store`, in id order, plus how many ids were stale.
    pub fn resolve<'a>(&self, store: &'a [HousingListing]) -> (Vec<&'a HousingListing>, usize) {
        let found: Vec<&HousingListing> = self
            .ids
            .iter()
            .filter_map(|id| store.iter().find(|l| l.id == *id))
            .collect();
        let stale = self.ids.len() - found.len();
        (found, stale)
    }

    // A failed write keeps the in-memory set; the next toggle rewrites everything anyway.
    fn persist(&self) {
        let ids: Vec<ListingId> = self.ids.iter().copied().collect();
        let payload = match serde_json::to_string(&ids) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to encode favorites");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &payload) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist favorites");
        }
    }
}
