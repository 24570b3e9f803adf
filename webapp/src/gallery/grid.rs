use dioxus::prelude::*;

use site::{AppState, EntryBody, EntryId, GalleryEntry};

#[derive(Clone, PartialEq, Props)]
struct GalleryTileProps {
    state: Signal<AppState>,
    selected: Signal<Option<EntryId>>,
    entry: GalleryEntry,
    is_admin: bool,
}

#[component]
fn GalleryTile(props: GalleryTileProps) -> Element {
    let mut state = props.state;
    let mut selected = props.selected;
    let entry = props.entry;
    let id = entry.id.clone();
    let reader_id = entry.id.clone();
    let caption = entry.caption().to_owned();

    let media = match &entry.body {
        EntryBody::Image { url, caption } => rsx! {
            img { src: "{url}", alt: "{caption}", loading: "lazy" }
        },
        EntryBody::Video { url, .. } if url.is_empty() => rsx! {
            div { class: "media-missing", "Video coming soon" }
        },
        EntryBody::Video { url, .. } => rsx! {
            video { src: "{url}", controls: true, preload: "metadata" }
        },
        EntryBody::Blog { cover: Some(cover), title, .. } => rsx! {
            img { src: "{cover}", alt: "{title}", loading: "lazy" }
        },
        EntryBody::Blog { cover: None, .. } => rsx! {
            div { class: "media-missing", "Article" }
        },
    };

    rsx! {
        div { class: "card gallery-card",
            {media}
            div { class: "gallery-card-body",
                if let Some(date) = &entry.date {
                    p { class: "gallery-date", "{date}" }
                }
                if let Some(title) = entry.title() {
                    h3 { style: "font-family: var(--font-serif); margin-bottom: var(--space-2);",
                        "{title}"
                    }
                    p { style: "display: -webkit-box; -webkit-line-clamp: 3; -webkit-box-orient: vertical; overflow: hidden;",
                        "{caption}"
                    }
                    button {
                        class: "btn btn-ghost",
                        style: "padding-left: 0; color: var(--primary);",
                        onclick: move |_| selected.set(Some(reader_id.clone())),
                        "Read Article \u{2192}"
                    }
                } else {
                    p { "{caption}" }
                }
            }
            if props.is_admin {
                button {
                    class: "btn btn-danger gallery-remove",
                    title: "Remove",
                    onclick: move |_| state.write().remove_from_gallery(&id),
                    "\u{1f5d1}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryGridProps {
    state: Signal<AppState>,
    selected: Signal<Option<EntryId>>,
    entries: Vec<GalleryEntry>,
    is_admin: bool,
}

#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    if props.entries.is_empty() {
        return rsx! {
            div { class: "gallery-empty", "Nothing here yet." }
        };
    }

    rsx! {
        div { class: "gallery-grid",
            for entry in props.entries.iter() {
                GalleryTile {
                    key: "{entry.id}",
                    state: props.state,
                    selected: props.selected,
                    entry: entry.clone(),
                    is_admin: props.is_admin,
                }
            }
        }
    }
}
