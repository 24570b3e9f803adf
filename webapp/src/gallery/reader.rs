use dioxus::prelude::*;

use crate::components::modal::{ModalSize, ModernModal};
use site::{AppState, EntryId};

#[derive(Clone, PartialEq, Props)]
pub struct BlogReaderProps {
    state: Signal<AppState>,
    selected: Signal<Option<EntryId>>,
    id: EntryId,
}

// full-text view of a blog post.  if the post was removed while open, the reader
// simply renders nothing
#[component]
pub fn BlogReader(props: BlogReaderProps) -> Element {
    let mut selected = props.selected;
    let state = props.state.read();

    let Some(entry) = state.gallery().iter().find(|entry| entry.id == props.id) else {
        return rsx! {};
    };
    let title = entry.title().unwrap_or_default().to_owned();

    rsx! {
        ModernModal {
            title,
            size: ModalSize::Large,
            on_close: move |_| selected.set(None),
            if let Some(cover) = entry.url() {
                img {
                    src: "{cover}",
                    style: "width: 100%; max-height: 320px; object-fit: cover; border-radius: var(--radius-lg); margin-bottom: var(--space-4);",
                }
            }
            if let Some(date) = &entry.date {
                p { class: "gallery-date", style: "margin-bottom: var(--space-4);", "{date}" }
            }
            for (n, paragraph) in entry.paragraphs().enumerate() {
                p { key: "{n}", class: "reader-paragraph", "{paragraph}" }
            }
        }
    }
}
