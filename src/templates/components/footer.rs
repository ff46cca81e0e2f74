use chrono::Datelike;
use maud::{html, Markup};

use crate::domain::catalog::FOOTER_SECTIONS;

pub fn footer() -> Markup {
    let year = chrono::Local::now().year();

    html! {
        footer class="footer" {
            div class="footer-grid" {
                @for section in FOOTER_SECTIONS {
                    section {
                        h4 { (section.heading) }
                        ul {
                            @for (label, href) in section.links {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                }
            }
            p class="copyright" { "© " (year) " Listify. All rights reserved." }
        }
    }
}
