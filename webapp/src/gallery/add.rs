use dioxus::prelude::*;
use tracing::warn;

use crate::common::{today, upload::read_image_upload};
use site::{
    AppState, Variant,
    gallery::EntryDraft,
    upload::ACCEPTED_IMAGE_TYPES,
};

fn variant_label(variant: Variant) -> &'static str {
    match variant {
        Variant::Image => "Photo",
        Variant::Video => "Video",
        Variant::Blog => "Article",
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AddEntryFormProps {
    state: Signal<AppState>,
}

// AddEntryForm
//
// admin-only form for new gallery entries.  the add button stays disabled until the
// draft has the field its variant requires, so a submit is never rejected
#[component]
pub fn AddEntryForm(props: AddEntryFormProps) -> Element {
    let mut state = props.state;
    let mut draft = use_signal(EntryDraft::default);

    let add = move |_| {
        let id = state.write().new_entry_id();
        let built = draft.read().build(id, today());

        match built {
            Ok(entry) => {
                state.write().add_to_gallery(entry);
                draft.write().reset();
            }
            Err(err) => warn!("gallery entry not added: {err}"),
        }
    };

    let current = draft.read().clone();
    let ready = current.is_ready();
    let url_placeholder = match current.variant {
        Variant::Blog => "Cover image URL (optional)",
        Variant::Video => "Video URL",
        Variant::Image => "Image URL",
    };

    rsx! {
        div { class: "card gallery-add",
            h3 { "Add to Gallery" }

            select {
                class: "field",
                value: current.variant.slug(),
                onchange: move |evt| {
                    if let Some(variant) = Variant::from_slug(&evt.value()) {
                        draft.write().variant = variant;
                    }
                },
                for variant in Variant::all() {
                    option {
                        key: "{variant}",
                        value: variant.slug(),
                        selected: variant == current.variant,
                        {variant_label(variant)}
                    }
                }
            }

            if current.variant == Variant::Blog {
                input {
                    class: "field",
                    placeholder: "Article title",
                    value: "{current.title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
            }

            input {
                class: "field",
                placeholder: url_placeholder,
                value: "{current.url}",
                oninput: move |evt| draft.write().url = evt.value(),
            }

            if current.variant != Variant::Video {
                label { class: "upload-label",
                    "Upload Image"
                    input {
                        r#type: "file",
                        accept: ACCEPTED_IMAGE_TYPES,
                        onchange: move |evt| async move {
                            let mut draft = draft;
                            if let Some(uri) = read_image_upload(&evt).await {
                                draft.write().url = uri;
                            }
                        },
                    }
                }
            }

            textarea {
                class: "field",
                rows: "4",
                placeholder: if current.variant == Variant::Blog { "Article body" } else { "Caption" },
                value: "{current.caption}",
                oninput: move |evt| draft.write().caption = evt.value(),
            }

            button {
                class: "btn btn-primary",
                disabled: !ready,
                onclick: add,
                "Add"
            }
        }
    }
}
