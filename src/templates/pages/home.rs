// templates/pages/home.rs

use crate::domain::listing::Recommendation;
use crate::domain::search::SearchError;
use crate::templates::{
    components::{category_bar, hero, recommendation_card, search_box, HeroVm},
    desktop_layout, View,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub hero: HeroVm<'a>,
    /// Each recommendation with its favorite flag.
    pub recommendations: Vec<(&'a Recommendation, bool)>,
    pub search_query: &'a str,
    pub search_error: Option<&'a SearchError>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Home",
        View::Home,
        html! {
            (hero(&vm.hero))

            (category_bar())

            section class="search-section" {
                (search_box(vm.search_query, vm.search_error))
            }

            section class="recommendations" {
                div class="section-header" {
                    h2 { "Fresh recommendations" }
                    a href="/category/vehicles" { "See all" }
                }
                div class="rec-grid" {
                    @for (rec, is_favorite) in &vm.recommendations {
                        (recommendation_card(rec, *is_favorite))
                    }
                }
            }
        },
    )
}
