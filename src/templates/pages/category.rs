use crate::domain::catalog::Category;
use crate::domain::listing::Recommendation;
use crate::templates::{
    components::{card, recommendation_card},
    desktop_layout, View,
};
use maud::{html, Markup};

/// `listings` holds whatever the catalog has for this category, with favorite flags.
pub fn category_page(category: &Category, listings: &[(&Recommendation, bool)]) -> Markup {
    desktop_layout(
        category.label,
        View::Category,
        html! {
            h1 { span class="icon" { (category.icon) } " " (category.label) }

            (card("Subcategories", html! {
                ul class="subcategories" {
                    @for sub in category.subcategories {
                        li { (sub) }
                    }
                }
            }))

            @if category.slug == "housing" {
                p { a href="/housing" class="btn btn-primary" { "Browse all housing" } }
            } @else if listings.is_empty() {
                p class="muted" { "New " (category.label.to_lowercase()) " listings are on their way." }
            } @else {
                p class="result-count" { strong { (listings.len()) } " listings" }
                div class="rec-grid" {
                    @for (rec, is_favorite) in listings {
                        (recommendation_card(rec, *is_favorite))
                    }
                }
            }
        },
    )
}
