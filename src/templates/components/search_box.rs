use maud::{html, Markup};

use crate::domain::search::SearchError;

pub fn search_box(query: &str, error: Option<&SearchError>) -> Markup {
    html! {
        form class="search-box" method="get" action="/search" role="search" {
            label class="sr-only" for="search-q" { "Search listings" }
            input
                type="search"
                id="search-q"
                name="q"
                value=(query)
                placeholder="Search by title or location…"
                aria-invalid=[error.map(|_| "true")]
                aria-describedby=[error.map(|_| "search-error")];
            button type="submit" class="btn btn-primary" { "Search" }
            @if let Some(err) = error {
                p id="search-error" class="field-error" role="alert" { (err.to_string()) }
            }
        }
    }
}
