use dioxus::prelude::*;

use crate::common::current_year;
use crate::components::social::SocialLinks;
use site::{AppState, Page};

// the footer skips the gallery page
const FOOTER_PAGES: [Page; 4] = [Page::Home, Page::About, Page::Portfolio, Page::Contact];

#[derive(Clone, PartialEq, Props)]
pub struct FooterProps {
    state: Signal<AppState>,
}

#[component]
pub fn Footer(props: FooterProps) -> Element {
    let mut state = props.state;
    let social = state.read().content().social.clone();
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "footer-name", "\u{2695} DR. MONIA ZAMAN" }
            p { style: "margin-bottom: var(--space-6);",
                "Specialist in Obstetrics & Gynaecology \u{2022} Muscat, Oman"
            }

            SocialLinks { social }

            div { class: "footer-links",
                for page in FOOTER_PAGES {
                    button {
                        key: "{page}",
                        onclick: move |_| state.write().navigate(page),
                        {page.label()}
                    }
                }
            }

            p { style: "font-size: 0.75rem;",
                "\u{00a9} {year} Dr. Monia Zaman. All rights reserved."
            }
        }
    }
}
