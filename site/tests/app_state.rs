use std::{cell::RefCell, rc::Rc};

use site::{
    AppState, EntryBody, EntryId, GalleryEntry, Page, SiteConfig, SiteContent,
    state::{Effects, NoEffects},
};

#[derive(Clone, Debug, PartialEq)]
enum Recorded {
    PrimaryColor(String),
    DarkTheme(bool),
    ScrollToTop,
}

#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<Recorded>>>,
}

impl Recorder {
    fn take(&self) -> Vec<Recorded> {
        self.log.borrow_mut().drain(..).collect()
    }
}

impl Effects for Recorder {
    fn apply_primary_color(&self, color: &str) {
        self.log
            .borrow_mut()
            .push(Recorded::PrimaryColor(color.to_owned()));
    }

    fn set_dark_theme(&self, enabled: bool) {
        self.log.borrow_mut().push(Recorded::DarkTheme(enabled));
    }

    fn scroll_to_top(&self) {
        self.log.borrow_mut().push(Recorded::ScrollToTop);
    }
}

fn headless() -> AppState {
    AppState::new(&SiteConfig::default(), Box::new(NoEffects))
}

fn recorded() -> (AppState, Recorder) {
    let recorder = Recorder::default();
    let state = AppState::new(&SiteConfig::default(), Box::new(recorder.clone()));
    (state, recorder)
}

fn image(id: &str) -> GalleryEntry {
    GalleryEntry {
        id: EntryId::from(id),
        date: None,
        body: EntryBody::Image {
            url: String::from("http://a"),
            caption: String::from("c"),
        },
    }
}

#[test]
fn test_default_state() {
    let state = headless();

    assert_eq!(state.current_page(), Page::Home);
    assert!(state.dark_mode());
    assert!(!state.is_admin());
    assert_eq!(state.content(), &SiteContent::default());

    let ids: Vec<&str> = state.gallery().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["7", "6", "5", "4", "3", "2", "1"]);
}

#[test]
fn test_initial_effects_applied() {
    let (_state, recorder) = recorded();

    assert_eq!(
        recorder.take(),
        vec![
            Recorded::PrimaryColor(String::from("#0d9488")),
            Recorded::DarkTheme(true),
        ]
    );
}

#[test]
fn test_login() {
    let mut state = headless();

    assert!(!state.login("wrong"));
    assert!(!state.is_admin());

    assert!(state.login("123465"));
    assert!(state.is_admin());

    state.logout();
    assert!(!state.is_admin());

    // logging out twice is fine
    state.logout();
    assert!(!state.is_admin());
}

#[test]
fn test_login_uses_configured_secret() {
    let config = SiteConfig {
        admin_secret: String::from("letmein"),
        ..SiteConfig::default()
    };
    let mut state = AppState::new(&config, Box::new(NoEffects));

    assert!(!state.login("123465"));
    assert!(state.login("letmein"));
}

#[test]
fn test_gallery_add_remove() {
    let mut state = headless();
    let before = state.gallery().len();

    state.add_to_gallery(image("x"));
    assert_eq!(state.gallery().len(), before + 1);
    assert_eq!(state.gallery()[0].id.as_str(), "x");

    state.remove_from_gallery(&EntryId::from("x"));
    assert_eq!(state.gallery().len(), before);
    assert!(state.gallery().iter().all(|e| e.id.as_str() != "x"));

    state.remove_from_gallery(&EntryId::from("x"));
    assert_eq!(state.gallery().len(), before);
}

#[test]
fn test_remove_absent_id_is_noop() {
    let mut state = headless();
    let before = state.gallery().to_vec();

    state.remove_from_gallery(&EntryId::from("does-not-exist"));
    assert_eq!(state.gallery(), before.as_slice());
}

#[test]
fn test_new_entry_ids_are_unique() {
    let mut state = headless();

    let first = state.new_entry_id();
    let second = state.new_entry_id();
    assert_ne!(first, second);
}

#[test]
fn test_update_round_trip() {
    let mut state = headless();
    let mut content = state.content().clone();
    content.about.bio = String::from("New bio");
    content.contact.phone = String::from("+968 00000000");

    state.update_content(content.clone());
    assert_eq!(state.content(), &content);
}

#[test]
fn test_theme_update_changes_only_color() {
    let (mut state, recorder) = recorded();
    recorder.take();

    let next = state.content().with_primary_color("#C5A059");
    state.update_content(next);

    let mut expected = SiteContent::default();
    expected.theme.primary_color = String::from("#C5A059");
    assert_eq!(state.content(), &expected);

    assert_eq!(
        recorder.take(),
        vec![Recorded::PrimaryColor(String::from("#C5A059"))]
    );
}

#[test]
fn test_unrelated_update_does_not_recolor() {
    let (mut state, recorder) = recorded();
    recorder.take();

    let next = state.content().with_hero_title("Hello");
    state.update_content(next);

    assert!(recorder.take().is_empty());
}

#[test]
fn test_toggle_dark_mode() {
    let (mut state, recorder) = recorded();
    recorder.take();

    state.toggle_dark_mode();
    assert!(!state.dark_mode());
    state.toggle_dark_mode();
    assert!(state.dark_mode());

    assert_eq!(
        recorder.take(),
        vec![Recorded::DarkTheme(false), Recorded::DarkTheme(true)]
    );
}

#[test]
fn test_navigate_every_pair() {
    let (mut state, recorder) = recorded();

    for from in Page::all() {
        for to in Page::all() {
            state.navigate(from);
            state.navigate(to);
            assert_eq!(state.current_page(), to);
        }
    }

    recorder.take();
    state.navigate(Page::Contact);
    assert_eq!(recorder.take(), vec![Recorded::ScrollToTop]);
}
