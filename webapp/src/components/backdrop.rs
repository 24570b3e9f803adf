use dioxus::prelude::*;

use site::AppState;

#[derive(Clone, PartialEq, Props)]
pub struct BackdropProps {
    state: Signal<AppState>,
}

// soft radial wash behind the pages, tinted by the theme color
#[component]
pub fn Backdrop(props: BackdropProps) -> Element {
    let state = props.state.read();
    let color = &state.content().theme.primary_color;
    let base = if state.dark_mode() { "#000000" } else { "#fafaf9" };

    rsx! {
        div {
            class: "backdrop",
            style: "background: radial-gradient(circle at 20% 10%, {color}, transparent 45%), radial-gradient(circle at 85% 80%, {color}, {base} 60%);",
        }
    }
}
