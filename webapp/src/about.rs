use dioxus::prelude::*;

use crate::profile::{EDUCATION, LANGUAGES};
use site::AppState;

#[derive(Clone, PartialEq, Props)]
pub struct AboutPageProps {
    state: Signal<AppState>,
}

#[component]
pub fn AboutPage(props: AboutPageProps) -> Element {
    let about = props.state.read().content().about.clone();

    rsx! {
        div { class: "page",
            p { class: "eyebrow", style: "text-align: center;", "About Dr. Monia" }
            h1 { class: "page-title", "Compassion, Excellence, Dignity" }

            div { class: "card", style: "max-width: 48rem; margin: 0 auto;",
                h2 { style: "font-family: var(--font-serif); margin-bottom: var(--space-4);",
                    "{about.title}"
                }
                p { "{about.bio}" }
            }

            p { class: "quote", "\u{201c}{about.philosophy}\u{201d}" }

            h2 { class: "page-title", "Education" }
            div { class: "timeline",
                for item in EDUCATION.iter() {
                    div { key: "{item.year}", class: "timeline-item",
                        div { class: "timeline-year", "{item.year}" }
                        h3 { "{item.degree}" }
                        p { "{item.institution}, {item.location}" }
                        p { class: "timeline-details", "{item.description}" }
                    }
                }
            }

            h2 { class: "page-title", style: "margin-top: var(--space-12);", "Languages" }
            div { class: "card", style: "max-width: 32rem; margin: 0 auto;",
                for language in LANGUAGES.iter() {
                    div { key: "{language.name}", style: "margin-bottom: var(--space-3);",
                        div { style: "display: flex; justify-content: space-between;",
                            span { "{language.name}" }
                            span { class: "gallery-date", "{language.level}%" }
                        }
                        div { style: "height: 6px; border-radius: 9999px; background-color: var(--border);",
                            div { style: "height: 100%; width: {language.level}%; border-radius: 9999px; background-color: var(--primary);" }
                        }
                    }
                }
            }
        }
    }
}
