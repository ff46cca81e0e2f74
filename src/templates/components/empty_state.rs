use maud::{html, Markup};

pub fn empty_state(reset_href: &str) -> Markup {
    html! {
        div class="empty-state" {
            h3 { "No results" }
            p { "No listings match your filters." }
            a href=(reset_href) class="btn" { "Reset filters" }
        }
    }
}
