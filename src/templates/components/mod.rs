use maud::{html, Markup};

use crate::domain::listing::DEFAULT_IMAGE;

pub mod empty_state;
pub mod error;
pub mod favorite_button;
pub mod filters;
pub mod footer;
pub mod hero;
pub mod housing_card;
pub mod navbar;
pub mod pagination;
pub mod recommendation_card;
pub mod search_box;

pub use empty_state::empty_state;
pub use error::html_error_response;
pub use favorite_button::{housing_favorite_button, recommendation_favorite_button};
pub use filters::{filter_sidebar, sort_select, FacetOptions};
pub use footer::footer;
pub use hero::{hero, HeroVm};
pub use housing_card::housing_card;
pub use navbar::{category_bar, navbar};
pub use pagination::pagination;
pub use recommendation_card::recommendation_card;
pub use search_box::search_box;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// `<img>` that swaps to the default image once if `src` fails to load.
pub fn image_with_fallback(src: &str, alt: &str, class: &str) -> Markup {
    html! {
        img
            src=(src)
            alt=(alt)
            class=(class)
            loading="lazy"
            onerror=(format!("this.onerror=null;this.src='{DEFAULT_IMAGE}';"));
    }
}
