use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

// every page of the site.  the set is closed, so navigate() cannot be handed a
// page that does not exist
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    About,
    Portfolio,
    DailyLife,
    Contact,
}

impl Page {
    pub fn all() -> [Self; 5] {
        [
            Self::Home,
            Self::About,
            Self::Portfolio,
            Self::DailyLife,
            Self::Contact,
        ]
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::DailyLife => "daily-life",
            Self::Contact => "contact",
        }
    }

    // the desktop navbar and footer use the short label, the mobile menu spells
    // out the gallery page
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Portfolio => "Portfolio",
            Self::DailyLife => "Gallery",
            Self::Contact => "Contact",
        }
    }

    pub fn mobile_label(self) -> &'static str {
        match self {
            Self::DailyLife => "Monia's Daily Life",
            other => other.label(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Debug, Default)]
pub struct NavigationState {
    current: Page,
}

impl NavigationState {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn navigate(&mut self, page: Page) {
        debug!({from = %self.current, to = %page}, "navigating");
        self.current = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_distinct() {
        let mut slugs: Vec<_> = Page::all().iter().map(|p| p.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), Page::all().len());
    }

    #[test]
    fn navigating_to_current_page_is_allowed() {
        let mut nav = NavigationState::default();
        nav.navigate(Page::Home);
        assert_eq!(nav.current(), Page::Home);
    }
}
