use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    #[props(into)]
    title: String,
    #[props(default)]
    size: ModalSize,
    children: Element,
    on_close: EventHandler<()>,
}

// ModernModal
//
// overlay + dialog.  whether the modal is showing is owned by the caller, which
// renders this conditionally and is told about close requests via on_close
#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let width = match props.size {
        ModalSize::Small => "max-width: 400px;",
        ModalSize::Medium => "max-width: 600px;",
        ModalSize::Large => "max-width: 800px;",
    };
    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            div {
                class: "modal-content",
                style: "{width}",
                // keep clicks inside the dialog from reaching the overlay
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }

                div { class: "modal-body", {props.children} }
            }
        }
    }
}
