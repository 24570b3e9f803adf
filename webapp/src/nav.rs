use dioxus::prelude::*;

use crate::{
    about::AboutPage, contact::ContactPage, gallery::DailyLifePage, home::HomePage,
    portfolio::PortfolioPage,
};
use site::{AppState, Page, SiteConfig};

#[derive(Clone, PartialEq, Props)]
pub struct AppPageProps {
    state: Signal<AppState>,
    config: Signal<SiteConfig>,
}

// exactly one page is mounted at a time; page-local signals (filters, open
// readers, half-typed forms) are dropped when the page changes
#[component]
pub fn AppMainPage(props: AppPageProps) -> Element {
    let state = props.state;
    let config = props.config;

    let page = state.read().current_page();

    match page {
        Page::Home => rsx! { HomePage { state } },
        Page::About => rsx! { AboutPage { state } },
        Page::Portfolio => rsx! { PortfolioPage {} },
        Page::DailyLife => rsx! { DailyLifePage { state } },
        Page::Contact => rsx! { ContactPage { state, config } },
    }
}
