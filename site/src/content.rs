use std::fmt;

use serde::{Deserialize, Serialize};

// site content
//
// this is the single editable record behind every page.  all of the fields are
// plain strings so that the record is always fully populated; "not configured"
// is expressed as the empty string rather than a missing field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub about: About,
    pub contact: Contact,
    pub social: Social,
    pub theme: Theme,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    // either a remote url or an inline data uri (see upload.rs)
    pub image_url: String,
}

impl Hero {
    pub fn has_placeholder_image(&self) -> bool {
        self.image_url.contains("placeholder")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub bio: String,
    pub philosophy: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Contact {
    // the public pages only show the start of the phone number
    pub fn masked_phone(&self) -> String {
        let keep = self.phone.chars().count().saturating_sub(5);
        let visible: String = self.phone.chars().take(keep).collect();

        format!("{visible}xxxxx")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Youtube,
    Linkedin,
}

impl SocialPlatform {
    pub fn all() -> [Self; 5] {
        [
            Self::Facebook,
            Self::Instagram,
            Self::Twitter,
            Self::Youtube,
            Self::Linkedin,
        ]
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook URL",
            Self::Instagram => "Instagram URL",
            Self::Twitter => "Twitter/X URL",
            Self::Youtube => "YouTube URL",
            Self::Linkedin => "LinkedIn URL",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Youtube => "YouTube",
            Self::Linkedin => "LinkedIn",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub youtube: String,
    pub linkedin: String,
}

impl Social {
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Youtube => &self.youtube,
            SocialPlatform::Linkedin => &self.linkedin,
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        let slot = match platform {
            SocialPlatform::Facebook => &mut self.facebook,
            SocialPlatform::Instagram => &mut self.instagram,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Youtube => &mut self.youtube,
            SocialPlatform::Linkedin => &mut self.linkedin,
        };
        *slot = url.into();
    }

    // only the platforms that have a url configured, in display order
    pub fn links(&self) -> impl Iterator<Item = (SocialPlatform, &str)> + '_ {
        SocialPlatform::all()
            .into_iter()
            .map(|platform| (platform, self.get(platform)))
            .filter(|(_, url)| !url.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: String,
}

// copy-on-write helpers
//
// the admin editor never mutates the live record in place.  each helper takes the
// current record by reference and hands back a complete new one with a single leaf
// changed, which is then swapped in through AppState::update_content()
impl SiteContent {
    pub fn with_primary_color(&self, color: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.theme.primary_color = color.into();
        next
    }

    pub fn with_hero_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.hero.title = title.into();
        next
    }

    pub fn with_hero_image(&self, image_url: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.hero.image_url = image_url.into();
        next
    }

    pub fn with_social(&self, platform: SocialPlatform, url: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.social.set(platform, url);
        next
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        SiteContent {
            hero: Hero {
                title: String::from("Dr. Monia Zaman"),
                subtitle: String::from("Specialist (MBBS, DOWH)"),
                description: String::from(
                    "Providing high-quality women\u{2019}s healthcare with a commitment to excellence, dignity, and compassion for over 25 years in the Gulf region.",
                ),
                image_url: String::from("https://iili.io/fCYJ7hQ.png"),
            },
            about: About {
                title: String::from("Compassion-Driven Medical Approach"),
                bio: String::from(
                    "Dr. Monia Zaman is a highly respected Bangladeshi Specialist in Obstetrics & Gynaecology...",
                ),
                philosophy: String::from(
                    "Treat the patient, not just the condition \u{2014} with empathy, clarity, and respect.",
                ),
            },
            contact: Contact {
                email: String::from("moniazaman@gmail.com"),
                phone: String::from("+968 96101670"),
                location: String::from("Aster Royal Al Raffah Hospital, Muscat, Oman"),
            },
            social: Social {
                facebook: String::from("https://facebook.com"),
                instagram: String::from("https://instagram.com"),
                twitter: String::new(),
                youtube: String::new(),
                linkedin: String::from("https://linkedin.com"),
            },
            theme: Theme {
                primary_color: String::from("#0d9488"),
            },
        }
    }
}

// content store
//
// holds the one SiteContent record.  the store performs no merging: update() swaps
// in whatever complete record it is handed, and reports whether the primary color
// moved so the owner can push the new color out to the page
#[derive(Debug, Default)]
pub struct ContentStore {
    content: SiteContent,
}

impl ContentStore {
    pub fn new(content: SiteContent) -> Self {
        ContentStore { content }
    }

    pub fn get(&self) -> &SiteContent {
        &self.content
    }

    pub fn update(&mut self, content: SiteContent) -> bool {
        let color_changed = self.content.theme.primary_color != content.theme.primary_color;
        self.content = content;
        color_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_phone_hides_last_five() {
        let contact = SiteContent::default().contact;
        assert_eq!(contact.masked_phone(), "+968 961xxxxx");

        let short = Contact {
            email: String::new(),
            phone: String::from("123"),
            location: String::new(),
        };
        assert_eq!(short.masked_phone(), "xxxxx");
    }

    #[test]
    fn social_links_skip_unconfigured() {
        let social = SiteContent::default().social;
        let links: Vec<_> = social.links().map(|(p, _)| p).collect();

        assert_eq!(
            links,
            vec![
                SocialPlatform::Facebook,
                SocialPlatform::Instagram,
                SocialPlatform::Linkedin
            ]
        );
    }

    #[test]
    fn with_social_changes_one_platform() {
        let content = SiteContent::default();
        let next = content.with_social(SocialPlatform::Youtube, "https://youtube.com/@dr");

        assert_eq!(next.social.youtube, "https://youtube.com/@dr");
        assert_eq!(next.social.facebook, content.social.facebook);
        assert_eq!(next.hero, content.hero);
        assert_eq!(content.social.youtube, "");
    }

    #[test]
    fn update_reports_color_change() {
        let mut store = ContentStore::default();
        let same_color = store.get().with_hero_title("Welcome");
        assert!(!store.update(same_color));
        assert_eq!(store.get().hero.title, "Welcome");

        let recolored = store.get().with_primary_color("#be123c");
        assert!(store.update(recolored));
        assert_eq!(store.get().theme.primary_color, "#be123c");
    }

    #[test]
    fn placeholder_detection() {
        let mut hero = SiteContent::default().hero;
        assert!(!hero.has_placeholder_image());

        hero.image_url = String::from("https://via.placeholder.com/400");
        assert!(hero.has_placeholder_image());
    }
}
