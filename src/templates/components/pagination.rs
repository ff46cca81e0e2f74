use maud::{html, Markup};

use crate::domain::browse::{BrowseIntent, BrowseState};

pub fn pagination(state: &BrowseState, page: usize, total_pages: usize) -> Markup {
    if total_pages <= 1 {
        return html! {};
    }

    let href = |p: usize| state.href_after(BrowseIntent::SetPage(p));

    html! {
        nav class="pagination" aria-label="Pagination" {
            @if page > 1 {
                a href=(href(page - 1)) rel="prev" { "‹ Prev" }
            } @else {
                span class="disabled" { "‹ Prev" }
            }

            @for p in 1..=total_pages {
                @if p == page {
                    span class="current" aria-current="page" { (p) }
                } @else {
                    a href=(href(p)) { (p) }
                }
            }

            @if page < total_pages {
                a href=(href(page + 1)) rel="next" { "Next ›" }
            } @else {
                span class="disabled" { "Next ›" }
            }
        }
    }
}
