#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod common;
use common::dom::DomEffects;

mod components;
use components::{backdrop::Backdrop, footer::Footer, navigation::NavBar};

mod about;
mod admin;
use admin::AdminPanel;

mod contact;
mod gallery;
mod home;
mod portfolio;
mod profile;

mod nav;
use nav::AppMainPage;

use site::AppState;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let config = use_signal(common::load_config);
    let state = use_signal(|| AppState::new(&config.read(), Box::new(DomEffects)));

    rsx! {
        style { "{common::style::SITE_STYLES}" }
        div { class: "app-root",
            Backdrop { state }
            NavBar { state }
            main { class: "app-main",
                AppMainPage { state, config }
            }
            Footer { state }
            AdminPanel { state, config }
        }
    }
}
