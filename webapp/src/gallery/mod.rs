use dioxus::prelude::*;

use site::{AppState, EntryId, gallery::GalleryFilter};

pub mod add;
use add::AddEntryForm;

pub mod grid;
use grid::GalleryGrid;

pub mod reader;
use reader::BlogReader;

#[derive(Clone, PartialEq, Props)]
struct FilterTabsProps {
    filter: Signal<GalleryFilter>,
}

#[component]
fn FilterTabs(props: FilterTabsProps) -> Element {
    let mut filter = props.filter;

    rsx! {
        div { class: "filter-tabs",
            for tab in GalleryFilter::all() {
                button {
                    key: "{tab.label()}",
                    class: if filter() == tab { "filter-tab active" } else { "filter-tab" },
                    onclick: move |_| filter.set(tab),
                    {tab.label()}
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct DailyLifePageProps {
    state: Signal<AppState>,
}

#[component]
pub fn DailyLifePage(props: DailyLifePageProps) -> Element {
    let state = props.state;
    let filter = use_signal(GalleryFilter::default);
    let selected = use_signal(|| None::<EntryId>);

    let is_admin = state.read().is_admin();
    let entries: Vec<_> = state
        .read()
        .gallery_store()
        .filtered(filter())
        .cloned()
        .collect();

    rsx! {
        div { class: "page",
            p { class: "eyebrow", style: "text-align: center;", "Beyond the Clinic" }
            h1 { class: "page-title", "Monia's Daily Life" }
            p { class: "page-lead",
                "Moments from the ward, the conference hall, and everything in between, plus articles on women's health."
            }

            FilterTabs { filter }

            if is_admin {
                AddEntryForm { state }
            }

            GalleryGrid {
                state,
                selected,
                entries,
                is_admin,
            }

            if let Some(id) = selected() {
                BlogReader { state, selected, id }
            }
        }
    }
}
