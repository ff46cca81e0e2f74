use maud::{html, Markup};

use crate::domain::catalog::HeroSlide;
use crate::templates::components::image_with_fallback;

pub struct HeroVm<'a> {
    pub slides: &'a [HeroSlide],
    pub current: usize,
    /// Elapsed fraction of the auto-advance interval.
    pub progress: f32,
    pub transitioning: bool,
    /// False once the timer is torn down; the fragment stops polling.
    pub auto_advance: bool,
}

/// The carousel fragment. While auto-advance runs it polls `/hero` every
/// second, which drives the timer, and re-renders itself in place.
pub fn hero(vm: &HeroVm) -> Markup {
    let Some(slide) = vm.slides.get(vm.current) else {
        return html! { section #hero .hero .hero-empty {} };
    };

    html! {
        section
            #hero
            .hero
            .is-transitioning[vm.transitioning]
            hx-get=[vm.auto_advance.then_some("/hero")]
            hx-trigger=[vm.auto_advance.then_some("every 1s")]
            hx-swap="outerHTML"
        {
            div class="hero-slide" {
                (image_with_fallback(slide.image, slide.title, "hero-image"))
                div class="hero-caption" {
                    h1 { (slide.title) }
                    p { (slide.subtitle) }
                    a href=(slide.cta_href) class="btn btn-primary" { (slide.cta_label) }
                }
            }

            button
                class="hero-nav hero-prev"
                aria-label="Previous slide"
                hx-post="/hero/prev"
                hx-target="#hero"
                hx-swap="outerHTML"
            { "‹" }
            button
                class="hero-nav hero-next"
                aria-label="Next slide"
                hx-post="/hero/next"
                hx-target="#hero"
                hx-swap="outerHTML"
            { "›" }

            div class="hero-dots" {
                @for (i, s) in vm.slides.iter().enumerate() {
                    button
                        .hero-dot
                        .active[i == vm.current]
                        aria-label=(format!("Go to slide {}: {}", i + 1, s.title))
                        hx-post=(format!("/hero/go/{i}"))
                        hx-target="#hero"
                        hx-swap="outerHTML"
                    {}
                }
            }

            div class="hero-progress" {
                div class="hero-progress-bar" style=(format!("width: {:.0}%", vm.progress * 100.0)) {}
            }
        }
    }
}
