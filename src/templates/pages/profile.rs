use crate::domain::listing::HousingListing;
use crate::templates::{
    components::{card, housing_card},
    desktop_layout, View,
};
use maud::{html, Markup};

pub struct ProfileVm<'a> {
    pub favorites: Vec<&'a HousingListing>,
    /// Saved ids that no longer exist in the catalog.
    pub stale_count: usize,
}

pub fn profile_page(vm: &ProfileVm) -> Markup {
    desktop_layout(
        "Profile",
        View::Profile,
        html! {
            h1 { "Your profile" }

            (card("Saved listings", html! {
                @if vm.favorites.is_empty() {
                    p { "You haven't saved any listings yet. " a href="/housing" { "Browse housing" } }
                } @else {
                    p { "You have " strong { (vm.favorites.len()) } " saved listings." }
                    div class="listing-grid" {
                        @for listing in &vm.favorites {
                            (housing_card(listing, true))
                        }
                    }
                }
                @if vm.stale_count > 0 {
                    p class="muted" { (vm.stale_count) " saved listings are no longer available." }
                }
            }))
        },
    )
}
