use std::collections::BTreeSet;

use crate::domain::browse::{BrowseIntent, BrowseState};
use crate::domain::listing::ListingId;
use crate::domain::pipeline::BrowseResult;
use crate::templates::{
    components::{empty_state, filter_sidebar, housing_card, pagination, sort_select, FacetOptions},
    desktop_layout, View,
};
use maud::{html, Markup};

pub struct HousingVm<'a> {
    pub state: &'a BrowseState,
    pub result: &'a BrowseResult<'a>,
    pub facets: FacetOptions<'a>,
    pub favorites: &'a BTreeSet<ListingId>,
}

pub fn housing_page(vm: &HousingVm) -> Markup {
    desktop_layout(
        "Housing",
        View::Housing,
        html! {
            div class="housing-layout" {
                (filter_sidebar(vm.state, &vm.facets))

                section class="housing-results" {
                    div class="results-header" {
                        h1 { "Housing" }
                        p class="result-count" {
                            strong { (vm.result.total_count()) } " listings found"
                        }
                        (sort_select(vm.state))
                    }

                    @match vm.result {
                        BrowseResult::Empty => {
                            (empty_state(&vm.state.href_after(BrowseIntent::ResetFilters)))
                        }
                        BrowseResult::Page(page) => {
                            div class="listing-grid" {
                                @for listing in &page.items {
                                    (housing_card(listing, vm.favorites.contains(&listing.id)))
                                }
                            }
                            (pagination(vm.state, page.page, page.total_pages))
                        }
                    }
                }
            }
        },
    )
}
