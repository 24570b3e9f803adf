use tracing::{debug, info};

use crate::{
    config::SiteConfig,
    content::{ContentStore, SiteContent},
    gallery::{EntryId, GalleryEntry, GalleryStore, IdGenerator},
    navigation::{NavigationState, Page},
    preferences::PreferencesState,
    session::SessionState,
};

// page-wide side effects
//
// the stores only hold data; anything that has to reach outside of them (the css
// color variable, the dark class on the root element, the scroll position) goes
// through this trait so the state model stays free of browser types
pub trait Effects {
    fn apply_primary_color(&self, color: &str);

    fn set_dark_theme(&self, enabled: bool);

    fn scroll_to_top(&self);
}

// for running the state model without a page attached
pub struct NoEffects;

impl Effects for NoEffects {
    fn apply_primary_color(&self, _color: &str) {}

    fn set_dark_theme(&self, _enabled: bool) {}

    fn scroll_to_top(&self) {}
}

// AppState
//
// the one facade over all mutable site state.  the stores are private, so every
// write goes through a method here and triggers its side effect before returning;
// the caller is expected to hold this behind a single reactive handle so that the
// next render sees the write
pub struct AppState {
    content: ContentStore,
    gallery: GalleryStore,
    session: SessionState,
    preferences: PreferencesState,
    navigation: NavigationState,
    ids: IdGenerator,
    effects: Box<dyn Effects>,
}

impl AppState {
    pub fn new(config: &SiteConfig, effects: Box<dyn Effects>) -> Self {
        let state = AppState {
            content: ContentStore::new(SiteContent::default()),
            gallery: GalleryStore::seeded(),
            session: SessionState::new(config.admin_secret.clone()),
            preferences: PreferencesState::default(),
            navigation: NavigationState::default(),
            ids: IdGenerator::default(),
            effects,
        };

        // the page starts unstyled, so push the initial theme once
        state
            .effects
            .apply_primary_color(&state.content.get().theme.primary_color);
        state.effects.set_dark_theme(state.preferences.dark_mode());

        state
    }

    pub fn content(&self) -> &SiteContent {
        self.content.get()
    }

    pub fn gallery(&self) -> &[GalleryEntry] {
        self.gallery.list()
    }

    pub fn gallery_store(&self) -> &GalleryStore {
        &self.gallery
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn dark_mode(&self) -> bool {
        self.preferences.dark_mode()
    }

    pub fn current_page(&self) -> Page {
        self.navigation.current()
    }

    pub fn update_content(&mut self, content: SiteContent) {
        if self.content.update(content) {
            let color = &self.content.get().theme.primary_color;
            info!({color = %color}, "primary color changed");
            self.effects.apply_primary_color(color);
        }
    }

    pub fn new_entry_id(&mut self) -> EntryId {
        self.ids.next()
    }

    pub fn add_to_gallery(&mut self, entry: GalleryEntry) {
        self.gallery.add(entry);
    }

    pub fn remove_from_gallery(&mut self, id: &EntryId) {
        if self.gallery.remove(id).is_none() {
            debug!({id = %id}, "no gallery entry to remove");
        }
    }

    pub fn login(&mut self, secret: &str) -> bool {
        self.session.login(secret)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn toggle_dark_mode(&mut self) {
        let enabled = self.preferences.toggle();
        self.effects.set_dark_theme(enabled);
    }

    pub fn navigate(&mut self, page: Page) {
        self.navigation.navigate(page);
        self.effects.scroll_to_top();
    }
}
