use crate::templates::components::{footer, navbar};
use maud::{html, Markup, DOCTYPE};

/// Named views reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Housing,
    Profile,
    Category,
}

impl View {
    pub const NAV: [View; 3] = [View::Home, View::Housing, View::Profile];

    pub fn href(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Housing => "/housing",
            View::Profile => "/profile",
            View::Category => "/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Housing => "Housing",
            View::Profile => "Profile",
            View::Category => "Categories",
        }
    }
}

pub fn desktop_layout(title: &str, active: View, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Listify" }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/listify.js" defer {}
            }
            body {
                (navbar(active))
                main class="container" {
                    (content)
                }
                (footer())
            }
        }
    }
}
