use maud::{html, Markup};

use crate::domain::listing::HousingListing;
use crate::templates::components::{housing_favorite_button, image_with_fallback};

pub fn housing_card(listing: &HousingListing, is_favorite: bool) -> Markup {
    html! {
        article class="listing-card" id=(format!("listing-{}", listing.id)) {
            div class="listing-media" {
                (image_with_fallback(listing.cover_image(), &listing.title, "listing-image"))
                span class=(format!("badge badge-{}", listing.kind.as_str())) { (listing.kind.label()) }
                (housing_favorite_button(listing.id, is_favorite))
            }
            div class="listing-body" {
                p class="price" { (listing.price_label()) }
                h3 { (listing.title) }
                p class="location" { "📍 " (listing.location) }
                ul class="facts" {
                    li { (listing.bedrooms) " bd" }
                    li { (listing.bathrooms) " ba" }
                    li { (listing.area_sqft) " sqft" }
                    li { (listing.property_type.label()) }
                }
                p class="description" { (listing.description) }
                @if !listing.amenities.is_empty() {
                    ul class="amenities" {
                        @for amenity in &listing.amenities {
                            li { (amenity) }
                        }
                    }
                }
                div class="listing-footer" {
                    span class="posted" { (listing.posted) }
                    a href=(format!("mailto:{}", listing.contact_email)) class="btn btn-small" { "Contact" }
                }
            }
        }
    }
}
