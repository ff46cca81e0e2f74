use crate::domain::browse::{BrowseIntent, BrowseState};
use crate::domain::filters::{CountBucket, KindFilter, SortKey};
use crate::domain::listing::{ListingKind, PropertyType};

fn on_page(page: usize) -> BrowseState {
    BrowseState {
        page,
        ..Default::default()
    }
}

#[test]
fn every_filter_or_sort_change_resets_page_to_one() {
    let intents = vec![
        BrowseIntent::SetQuery("loft".into()),
        BrowseIntent::ToggleType(PropertyType::Loft),
        BrowseIntent::ToggleLocation("Downtown".into()),
        BrowseIntent::ToggleBedrooms(CountBucket::FourPlus),
        BrowseIntent::ToggleBathrooms(CountBucket::Exact(2)),
        BrowseIntent::SetMaxPrice(Some(1200)),
        BrowseIntent::SetMaxPrice(None),
        BrowseIntent::SetKind(KindFilter::Only(ListingKind::Sale)),
        BrowseIntent::SetSort(SortKey::PriceHigh),
        BrowseIntent::ResetFilters,
    ];

    for intent in intents {
        let next = on_page(3).reduce(intent.clone());
        assert_eq!(next.page, 1, "{intent:?} kept page 3");
    }
}

#[test]
fn page_change_keeps_filters() {
    let filtered = BrowseState::default()
        .reduce(BrowseIntent::ToggleType(PropertyType::Villa))
        .reduce(BrowseIntent::SetSort(SortKey::PriceLow));

    let paged = filtered.clone().reduce(BrowseIntent::SetPage(2));

    assert_eq!(paged.page, 2);
    assert_eq!(paged.criteria, filtered.criteria);
    assert_eq!(paged.sort, filtered.sort);
}

#[test]
fn toggles_add_then_remove() {
    let once = BrowseState::default().reduce(BrowseIntent::ToggleLocation("Hillside".into()));
    assert!(once.criteria.locations.contains("Hillside"));

    let twice = once.reduce(BrowseIntent::ToggleLocation("Hillside".into()));
    assert!(twice.criteria.locations.is_empty());
}

#[test]
fn query_string_round_trip_preserves_state() {
    let state = BrowseState::default()
        .reduce(BrowseIntent::SetQuery("sunny apt".into()))
        .reduce(BrowseIntent::ToggleType(PropertyType::Apartment))
        .reduce(BrowseIntent::ToggleLocation("Arts District".into()))
        .reduce(BrowseIntent::ToggleBedrooms(CountBucket::FourPlus))
        .reduce(BrowseIntent::SetMaxPrice(Some(2500)))
        .reduce(BrowseIntent::SetKind(KindFilter::Only(ListingKind::Rent)))
        .reduce(BrowseIntent::SetSort(SortKey::PriceHigh))
        .reduce(BrowseIntent::SetPage(2));

    assert_eq!(BrowseState::from_query(&state.to_query()), state);
}

#[test]
fn default_state_encodes_to_bare_housing_link() {
    let state = on_page(4);
    assert_eq!(state.href_after(BrowseIntent::SetPage(1)), "/housing");
}

#[test]
fn op_in_query_is_reduced_into_parsed_state() {
    let state = BrowseState::from_query("type=house&page=3&op=sort&value=price-low");
    assert_eq!(state.sort, SortKey::PriceLow);
    assert_eq!(state.page, 1);
    assert!(state.criteria.property_types.contains(&PropertyType::House));

    let paged = BrowseState::from_query("type=house&op=page&value=2");
    assert_eq!(paged.page, 2);
    assert!(paged.criteria.property_types.contains(&PropertyType::House));
}

#[test]
fn malformed_query_values_are_ignored() {
    let state = BrowseState::from_query(
        "type=castle&beds=many&baths=4%2B&max_price=cheap&kind=swap&sort=random&page=-1&op=bogus",
    );

    assert!(state.criteria.property_types.is_empty());
    assert!(state.criteria.bedrooms.is_empty());
    assert!(state.criteria.bathrooms.contains(&CountBucket::FourPlus));
    assert_eq!(state.criteria.max_price, None);
    assert_eq!(state.criteria.kind, KindFilter::All);
    assert_eq!(state.sort, SortKey::Newest);
    assert_eq!(state.page, 1);
}
