use dioxus::prelude::*;

use crate::profile::TESTIMONIALS;
use site::{AppState, Page};

#[derive(Clone, PartialEq, Props)]
pub struct HomePageProps {
    state: Signal<AppState>,
}

#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    let mut state = props.state;
    let hero = state.read().content().hero.clone();
    let initials: String = hero
        .title
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_uppercase())
        .collect();

    rsx! {
        div { class: "page",
            // Hero section
            section { class: "hero",
                div {
                    p { class: "eyebrow", "{hero.subtitle}" }
                    h1 { class: "hero-title", "{hero.title}" }
                    p { class: "hero-description", "{hero.description}" }
                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| state.write().navigate(Page::Contact),
                            "Book a Consultation"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| state.write().navigate(Page::About),
                            "Meet Dr. Monia"
                        }
                    }
                }
                div {
                    if hero.has_placeholder_image() {
                        div { class: "hero-monogram", "{initials}" }
                    } else {
                        img {
                            class: "hero-image",
                            src: "{hero.image_url}",
                            alt: "{hero.title}",
                        }
                    }
                }
            }

            // Highlights
            section { class: "highlights",
                div { class: "card",
                    div { class: "highlight-value", "25+" }
                    p { "Years of practice across the Gulf region" }
                }
                div { class: "card",
                    div { class: "highlight-value", "5" }
                    p { "Languages spoken with patients" }
                }
                div {
                    class: "card",
                    style: "cursor: pointer;",
                    onclick: move |_| state.write().navigate(Page::Portfolio),
                    div { class: "highlight-value", "\u{2192}" }
                    p { "View the full portfolio" }
                }
            }

            // Testimonials
            section { style: "margin-top: var(--space-16);",
                h2 { class: "page-title", "Patient Stories" }
                div { class: "testimonials",
                    for testimonial in TESTIMONIALS.iter() {
                        div { key: "{testimonial.name}", class: "card",
                            p { style: "font-style: italic; margin-bottom: var(--space-4);",
                                "\u{201c}{testimonial.text}\u{201d}"
                            }
                            p { class: "eyebrow", "{testimonial.name}" }
                        }
                    }
                }
            }
        }
    }
}
