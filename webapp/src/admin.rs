use dioxus::prelude::*;

use crate::common::{dom::alert, upload::read_image_upload};
use crate::components::modal::{ModalSize, ModernModal};
use site::{AppState, SiteConfig, content::SocialPlatform, upload::ACCEPTED_IMAGE_TYPES};

#[derive(Clone, PartialEq, Props)]
struct LoginBoxProps {
    state: Signal<AppState>,
    login_open: Signal<bool>,
    edit_mode: Signal<bool>,
}

#[component]
fn LoginBox(props: LoginBoxProps) -> Element {
    let mut state = props.state;
    let mut login_open = props.login_open;
    let mut edit_mode = props.edit_mode;
    let mut password = use_signal(String::new);

    rsx! {
        ModernModal {
            title: "Admin Access",
            size: ModalSize::Small,
            on_close: move |_| login_open.set(false),
            form {
                style: "display: grid; gap: var(--space-4);",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if state.write().login(&password()) {
                        login_open.set(false);
                        password.set(String::new());
                        edit_mode.set(true);
                    } else {
                        alert("Invalid Password");
                    }
                },
                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Enter Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                div { style: "display: flex; justify-content: flex-end; gap: var(--space-2);",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| login_open.set(false),
                        "Cancel"
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Login" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SwatchProps {
    state: Signal<AppState>,
    color: String,
    active: bool,
}

#[component]
fn Swatch(props: SwatchProps) -> Element {
    let mut state = props.state;
    let color = props.color;
    let swatch_style = format!("background-color: {color};");

    rsx! {
        button {
            class: if props.active { "swatch active" } else { "swatch" },
            style: swatch_style,
            onclick: move |_| {
                let next = state.read().content().with_primary_color(color.clone());
                state.write().update_content(next);
            },
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AdminEditorProps {
    state: Signal<AppState>,
    config: Signal<SiteConfig>,
    edit_mode: Signal<bool>,
}

// AdminEditor
//
// every input builds a complete new SiteContent from the current one and swaps it
// in, so an edit can never leave the record half-written
#[component]
fn AdminEditor(props: AdminEditorProps) -> Element {
    let mut state = props.state;
    let mut edit_mode = props.edit_mode;
    let palette = props.config.read().palette.clone();
    let content = state.read().content().clone();

    rsx! {
        div { class: "card admin-panel",
            div { style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { "Admin Controls" }
                button { class: "btn-close", onclick: move |_| edit_mode.set(false), "\u{00d7}" }
            }

            div {
                label { class: "field-label", "Theme Color" }
                div { class: "swatches",
                    for color in palette {
                        Swatch {
                            key: "{color}",
                            state,
                            active: color == content.theme.primary_color,
                            color: color.clone(),
                        }
                    }
                }
            }

            div {
                label { class: "field-label", "Hero Text" }
                input {
                    class: "field",
                    value: "{content.hero.title}",
                    oninput: move |evt| {
                        let next = state.read().content().with_hero_title(evt.value());
                        state.write().update_content(next);
                    },
                }
            }

            div {
                label { class: "field-label", "Hero Image" }
                input {
                    class: "field",
                    style: "margin-bottom: var(--space-2);",
                    placeholder: "Image URL",
                    value: "{content.hero.image_url}",
                    oninput: move |evt| {
                        let next = state.read().content().with_hero_image(evt.value());
                        state.write().update_content(next);
                    },
                }
                label { class: "upload-label",
                    "Upload Image (PNG)"
                    input {
                        r#type: "file",
                        accept: ACCEPTED_IMAGE_TYPES,
                        onchange: move |evt| async move {
                            let mut state = state;
                            if let Some(uri) = read_image_upload(&evt).await {
                                let next = state.read().content().with_hero_image(uri);
                                state.write().update_content(next);
                            }
                        },
                    }
                }
            }

            div {
                label { class: "field-label", "Social Media Links" }
                for platform in SocialPlatform::all() {
                    input {
                        key: "{platform}",
                        class: "field",
                        style: "margin-top: var(--space-2);",
                        placeholder: platform.placeholder(),
                        value: content.social.get(platform).to_owned(),
                        oninput: move |evt| {
                            let next = state.read().content().with_social(platform, evt.value());
                            state.write().update_content(next);
                        },
                    }
                }
            }

            button {
                class: "btn btn-danger",
                onclick: move |_| state.write().logout(),
                "Logout"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AdminPanelProps {
    state: Signal<AppState>,
    config: Signal<SiteConfig>,
}

// AdminPanel
//
// three faces: a lock button (and login box) for visitors, a collapsed edit button
// once logged in, and the editor itself
#[component]
pub fn AdminPanel(props: AdminPanelProps) -> Element {
    let state = props.state;
    let config = props.config;
    let mut login_open = use_signal(|| false);
    let mut edit_mode = use_signal(|| false);

    if !state.read().is_admin() {
        return rsx! {
            div { class: "admin-dock",
                button {
                    class: "btn btn-secondary admin-lock",
                    title: "Admin",
                    onclick: move |_| login_open.set(true),
                    "\u{1f512}"
                }
            }
            if login_open() {
                LoginBox { state, login_open, edit_mode }
            }
        };
    }

    rsx! {
        div { class: "admin-dock",
            if edit_mode() {
                AdminEditor { state, config, edit_mode }
            } else {
                button {
                    class: "btn btn-primary",
                    title: "Edit site",
                    onclick: move |_| edit_mode.set(true),
                    "\u{270e}"
                }
            }
        }
    }
}
