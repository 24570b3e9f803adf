// state model for the practice website
//
// everything the pages read or edit lives here, behind state::AppState.  nothing in
// this crate touches the browser: page-wide side effects are routed through the
// state::Effects trait, which the webapp implements against the dom

pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod navigation;
pub mod preferences;
pub mod session;
pub mod state;
pub mod upload;

pub use config::SiteConfig;
pub use content::SiteContent;
pub use gallery::{EntryBody, EntryId, GalleryEntry, Variant};
pub use navigation::Page;
pub use state::{AppState, Effects};
