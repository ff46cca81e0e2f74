use maud::{html, Markup};

use crate::domain::catalog::CATEGORIES;
use crate::templates::layouts::desktop::View;

pub fn navbar(active: View) -> Markup {
    html! {
        header class="navbar" {
            a href="/" class="brand" { "Listify" }
            nav {
                ul {
                    @for view in View::NAV {
                        li {
                            a href=(view.href()) class=[(view == active).then_some("active")] {
                                (view.label())
                            }
                        }
                    }
                    li class="dropdown" {
                        details {
                            summary { "Categories" }
                            ul class="dropdown-menu" {
                                @for category in CATEGORIES {
                                    li {
                                        a href=(format!("/category/{}", category.slug)) {
                                            span class="icon" { (category.icon) }
                                            " " (category.label)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            a href="/profile" class="btn btn-primary" { "Post an ad" }
        }
    }
}

/// Horizontal category strip shown under the hero.
pub fn category_bar() -> Markup {
    html! {
        nav class="category-bar" aria-label="Categories" {
            @for category in CATEGORIES {
                details class="category" {
                    summary {
                        span class="icon" { (category.icon) }
                        span { (category.label) }
                    }
                    ul class="dropdown-menu" {
                        li { a href=(format!("/category/{}", category.slug)) { "All " (category.label) } }
                        @for sub in category.subcategories {
                            li { a href=(format!("/category/{}", category.slug)) { (sub) } }
                        }
                    }
                }
            }
        }
    }
}
