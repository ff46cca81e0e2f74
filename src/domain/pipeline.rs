//! Filter → sort → paginate over the listing store.
//!
//! Every function here is pure: it borrows the store and returns references
//! into it, so the displayed page is always a subset of the store.

use std::cmp::Reverse;

use crate::domain::filters::{FilterCriteria, SortKey};
use crate::domain::listing::HousingListing;

pub const PAGE_SIZE: usize = 8;

pub fn filter_listings<'a>(
    store: &'a [HousingListing],
    criteria: &FilterCriteria,
) -> Vec<&'a HousingListing> {
    store.iter().filter(|l| criteria.matches(l)).collect()
}

/// Stable sort, so ties keep store order.
pub fn sort_listings(listings: &mut [&HousingListing], key: SortKey) {
    match key {
        SortKey::Newest => listings.sort_by_key(|l| Reverse(l.id)),
        SortKey::PriceLow => listings.sort_by_key(|l| l.price),
        SortKey::PriceHigh => listings.sort_by_key(|l| Reverse(l.price)),
    }
}

/// `ceil(count / PAGE_SIZE)`; zero listings is zero pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a requested page into `[1, total_pages]`. Returns 1 when there are no pages.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)`. Out-of-range pages yield an empty slice;
/// callers clamp first.
pub fn paginate<'s, 'a>(listings: &'s [&'a HousingListing], page: usize) -> &'s [&'a HousingListing] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= listings.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(listings.len());
    &listings[start..end]
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseResult<'a> {
    /// No listing satisfied the filters.
    Empty,
    Page(ListingPage<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage<'a> {
    pub items: Vec<&'a HousingListing>,
    /// Page actually shown, after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl BrowseResult<'_> {
    pub fn total_count(&self) -> usize {
        match self {
            BrowseResult::Empty => 0,
            BrowseResult::Page(p) => p.total_count,
        }
    }

    pub fn total_pages(&self) -> usize {
        match self {
            BrowseResult::Empty => 0,
            BrowseResult::Page(p) => p.total_pages,
        }
    }
}

/// Run the whole pipeline for one view of the housing browser.
pub fn browse<'a>(
    store: &'a [HousingListing],
    criteria: &FilterCriteria,
    sort: SortKey,
    requested_page: usize,
) -> BrowseResult<'a> {
    let mut filtered = filter_listings(store, criteria);
    if filtered.is_empty() {
        return BrowseResult::Empty;
    }

    sort_listings(&mut filtered, sort);

    let total_count = filtered.len();
    let total_pages = total_pages(total_count);
    let page = clamp_page(requested_page, total_pages);

    BrowseResult::Page(ListingPage {
        items: paginate(&filtered, page).to_vec(),
        page,
        total_pages,
        total_count,
    })
}
