use dioxus::prelude::*;

use site::{AppState, Page};

const SCROLL_THRESHOLD: f64 = 50.0;

// reports the window scroll offset back to rust on every scroll event
const SCROLL_WATCHER: &str = r#"
    window.addEventListener('scroll', () => dioxus.send(window.scrollY), { passive: true });
    dioxus.send(window.scrollY);
    await new Promise(() => {});
"#;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    state: Signal<AppState>,
    page: Page,
    menu_open: Signal<bool>,
    #[props(default)]
    mobile: bool,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let mut state = props.state;
    let mut menu_open = props.menu_open;
    let page = props.page;

    let active = state.read().current_page() == page;
    let label = if props.mobile {
        page.mobile_label()
    } else {
        page.label()
    };

    rsx! {
        button {
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |_| {
                state.write().navigate(page);
                menu_open.set(false);
            },
            "{label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ThemeToggleProps {
    state: Signal<AppState>,
}

#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let mut state = props.state;
    let icon = if state.read().dark_mode() { "\u{2600}" } else { "\u{263e}" };

    rsx! {
        button {
            class: "btn btn-ghost",
            title: "Toggle dark mode",
            onclick: move |_| state.write().toggle_dark_mode(),
            "{icon}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    state: Signal<AppState>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut state = props.state;
    let mut menu_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    use_future(move || async move {
        let mut watcher = document::eval(SCROLL_WATCHER);
        while let Ok(offset) = watcher.recv::<f64>().await {
            let past = offset > SCROLL_THRESHOLD;
            if *scrolled.peek() != past {
                scrolled.set(past);
            }
        }
    });

    let header_class = if scrolled() || menu_open() {
        "app-header scrolled"
    } else {
        "app-header"
    };

    rsx! {
        header { class: header_class,
            div { class: "nav-container",
                div {
                    class: "logo",
                    onclick: move |_| {
                        state.write().navigate(Page::Home);
                        menu_open.set(false);
                    },
                    span { "\u{2695}" }
                    span { "DR. MONIA ZAMAN" }
                }

                nav { class: "nav-links",
                    for page in Page::all() {
                        NavBarButton { key: "{page}", state, page, menu_open }
                    }
                    ThemeToggle { state }
                    button {
                        class: "btn btn-ghost nav-toggle",
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() { "\u{2715}" } else { "\u{2630}" }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile-menu",
                    for page in Page::all() {
                        NavBarButton {
                            key: "{page}",
                            state,
                            page,
                            menu_open,
                            mobile: true,
                        }
                    }
                }
            }
        }
    }
}
