use dioxus::prelude::*;

use crate::profile::EXPERIENCE;

#[component]
pub fn PortfolioPage() -> Element {
    rsx! {
        div { class: "page",
            p { class: "eyebrow", style: "text-align: center;", "Career" }
            h1 { class: "page-title", "Professional Journey" }
            p { class: "page-lead",
                "Over two decades of obstetric and gynaecological practice in Bangladesh, Saudi Arabia, and Oman."
            }

            div { class: "timeline",
                for item in EXPERIENCE.iter() {
                    div { key: "{item.years}", class: "timeline-item",
                        div { class: "timeline-year", "{item.years}" }
                        h3 { "{item.role}" }
                        p { class: "gallery-date", "{item.location}" }
                        p { style: "margin-top: var(--space-2);", "{item.description}" }
                        if !item.details.is_empty() {
                            ul { class: "timeline-details",
                                for detail in item.details.iter() {
                                    li { key: "{detail}", "{detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
