use maud::{html, Markup};

use crate::domain::listing::ListingId;

pub fn housing_favorite_button(id: ListingId, is_favorite: bool) -> Markup {
    favorite_button(&format!("/favorites/housing/{id}"), is_favorite)
}

pub fn recommendation_favorite_button(id: ListingId, is_favorite: bool) -> Markup {
    favorite_button(&format!("/favorites/recommendations/{id}"), is_favorite)
}

// The endpoint answers with this same fragment, swapped in place.
fn favorite_button(endpoint: &str, is_favorite: bool) -> Markup {
    html! {
        button
            .favorite
            .is-favorite[is_favorite]
            type="button"
            aria-pressed=(if is_favorite { "true" } else { "false" })
            aria-label=(if is_favorite { "Remove from favorites" } else { "Add to favorites" })
            hx-post=(endpoint)
            hx-swap="outerHTML"
        {
            @if is_favorite { "♥" } @else { "♡" }
        }
    }
}
