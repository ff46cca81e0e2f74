use maud::{html, Markup};

use crate::domain::listing::Recommendation;
use crate::templates::components::{image_with_fallback, recommendation_favorite_button};

pub fn recommendation_card(rec: &Recommendation, is_favorite: bool) -> Markup {
    let stars = rec.stars();

    html! {
        article class="rec-card" {
            div class="rec-media" {
                (image_with_fallback(rec.image_or_default(), &rec.title, "rec-image"))
                @if rec.featured {
                    span class="badge badge-featured" { "Featured" }
                }
                (recommendation_favorite_button(rec.id, is_favorite))
            }
            div class="rec-body" {
                p class="price" { (rec.price) }
                h3 { (rec.title) }
                p class="meta" { (rec.year) " · " (rec.mileage) }
                div class="rating" aria-label=(format!("{stars} out of {} stars", Recommendation::MAX_RATING)) {
                    @for i in 0..Recommendation::MAX_RATING {
                        span .star .filled[i < stars] { "★" }
                    }
                }
                div class="rec-footer" {
                    span { (rec.location) }
                    time datetime=(rec.date) { (rec.date_label()) }
                }
            }
        }
    }
}
