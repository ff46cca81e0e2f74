use maud::{html, Markup};

use crate::domain::browse::{BrowseIntent, BrowseState};
use crate::domain::filters::{CountBucket, KindFilter, SortKey};
use crate::domain::listing::{ListingKind, PropertyType};

pub struct FacetOptions<'a> {
    pub locations: &'a [&'a str],
    pub price_ceiling: u32,
}

/// Hidden inputs carrying the current state, so a form only changes the
/// field it submits through `op`/`value`.
fn state_inputs(state: &BrowseState, skip: &str) -> Markup {
    html! {
        @for (key, value) in state.to_pairs() {
            @if key != skip && key != "page" {
                input type="hidden" name=(key) value=(value);
            }
        }
    }
}

fn toggle_link(href: String, label: &str, checked: bool) -> Markup {
    html! {
        a .chip .checked[checked] href=(href) role="checkbox" aria-checked=(if checked { "true" } else { "false" }) {
            (label)
        }
    }
}

pub fn filter_sidebar(state: &BrowseState, facets: &FacetOptions) -> Markup {
    let c = &state.criteria;

    html! {
        aside class="filters" {
            div class="filters-header" {
                h2 { "Filters" }
                @if !c.is_empty() {
                    a href=(state.href_after(BrowseIntent::ResetFilters)) class="reset" { "Reset" }
                }
            }

            form method="get" action="/housing" class="filter-group" {
                (state_inputs(state, "q"))
                input type="hidden" name="op" value="query";
                label for="filter-q" { "Keyword" }
                input type="search" id="filter-q" name="value" value=(c.query) placeholder="Title or location";
                button type="submit" class="btn btn-small" { "Apply" }
            }

            div class="filter-group" {
                h3 { "Listing type" }
                @for (label, kind) in [
                    ("All", KindFilter::All),
                    ("Rent", KindFilter::Only(ListingKind::Rent)),
                    ("Sale", KindFilter::Only(ListingKind::Sale)),
                ] {
                    (toggle_link(state.href_after(BrowseIntent::SetKind(kind)), label, c.kind == kind))
                }
            }

            div class="filter-group" {
                h3 { "Property type" }
                @for t in PropertyType::ALL {
                    (toggle_link(
                        state.href_after(BrowseIntent::ToggleType(t)),
                        t.label(),
                        c.property_types.contains(&t),
                    ))
                }
            }

            div class="filter-group" {
                h3 { "Location" }
                @for loc in facets.locations {
                    (toggle_link(
                        state.href_after(BrowseIntent::ToggleLocation(loc.to_string())),
                        loc,
                        c.locations.contains(*loc),
                    ))
                }
            }

            div class="filter-group" {
                h3 { "Bedrooms" }
                @for b in CountBucket::OFFERED {
                    (toggle_link(
                        state.href_after(BrowseIntent::ToggleBedrooms(b)),
                        &b.label(),
                        c.bedrooms.contains(&b),
                    ))
                }
            }

            div class="filter-group" {
                h3 { "Bathrooms" }
                @for b in CountBucket::OFFERED {
                    (toggle_link(
                        state.href_after(BrowseIntent::ToggleBathrooms(b)),
                        &b.label(),
                        c.bathrooms.contains(&b),
                    ))
                }
            }

            form method="get" action="/housing" class="filter-group" {
                (state_inputs(state, "max_price"))
                input type="hidden" name="op" value="max_price";
                label for="filter-price" { "Max price" }
                input
                    type="number"
                    id="filter-price"
                    name="value"
                    min="0"
                    max=(facets.price_ceiling)
                    step="50"
                    value=[c.max_price]
                    placeholder="Any";
                button type="submit" class="btn btn-small" { "Apply" }
                @if c.max_price.is_some() {
                    a href=(state.href_after(BrowseIntent::SetMaxPrice(None))) class="clear" { "Clear" }
                }
            }
        }
    }
}

pub fn sort_select(state: &BrowseState) -> Markup {
    html! {
        form method="get" action="/housing" class="sort" {
            (state_inputs(state, "sort"))
            input type="hidden" name="op" value="sort";
            label for="sort" { "Sort by" }
            select id="sort" name="value" onchange="this.form.submit()" {
                @for key in SortKey::ALL {
                    option value=(key.as_str()) selected[state.sort == key] { (key.label()) }
                }
            }
            noscript { button type="submit" class="btn btn-small" { "Sort" } }
        }
    }
}
