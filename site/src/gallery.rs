use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_CAPTION: &str = "Dr. Monia's Update";

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_owned())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

// time-based id source
//
// ids are millisecond timestamps, but two entries created within the same
// millisecond (or after the clock steps backwards) would collide, so every id is
// forced past the last one handed out
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next_at(&mut self, now_millis: i64) -> EntryId {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        EntryId(id.to_string())
    }

    pub fn next(&mut self) -> EntryId {
        self.next_at(Utc::now().timestamp_millis())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Image,
    Video,
    Blog,
}

impl Variant {
    pub fn all() -> [Self; 3] {
        [Self::Image, Self::Video, Self::Blog]
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Blog => "blog",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().into_iter().find(|variant| variant.slug() == slug)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Blog => "Blog",
        };
        write!(f, "{}", name)
    }
}

// the variant decides which fields exist at all, so a blog post without a title
// or a photo without a source cannot be represented
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryBody {
    Image {
        url: String,
        caption: String,
    },
    Video {
        url: String,
        caption: String,
    },
    Blog {
        title: String,
        body: String,
        cover: Option<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub id: EntryId,
    pub date: Option<String>,
    pub body: EntryBody,
}

impl GalleryEntry {
    pub fn variant(&self) -> Variant {
        match self.body {
            EntryBody::Image { .. } => Variant::Image,
            EntryBody::Video { .. } => Variant::Video,
            EntryBody::Blog { .. } => Variant::Blog,
        }
    }

    // caption for photos and videos, the full body text for blog posts
    pub fn caption(&self) -> &str {
        match &self.body {
            EntryBody::Image { caption, .. } | EntryBody::Video { caption, .. } => caption,
            EntryBody::Blog { body, .. } => body,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.body {
            EntryBody::Image { url, .. } | EntryBody::Video { url, .. } => Some(url),
            EntryBody::Blog { cover, .. } => cover.as_deref(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.body {
            EntryBody::Blog { title, .. } => Some(title),
            _ => None,
        }
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.caption()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryFilter {
    #[default]
    All,
    Image,
    Video,
    Blog,
}

impl GalleryFilter {
    pub fn all() -> [Self; 4] {
        [Self::All, Self::Image, Self::Video, Self::Blog]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Content",
            Self::Image => "Photos",
            Self::Video => "Videos",
            Self::Blog => "Articles",
        }
    }

    pub fn matches(self, entry: &GalleryEntry) -> bool {
        match self {
            Self::All => true,
            Self::Image => entry.variant() == Variant::Image,
            Self::Video => entry.variant() == Variant::Video,
            Self::Blog => entry.variant() == Variant::Blog,
        }
    }
}

// gallery store
//
// an ordered collection, newest first.  the store trusts its callers: it neither
// issues ids nor checks for duplicates, and removing an unknown id is a no-op
#[derive(Debug, Default)]
pub struct GalleryStore {
    entries: Vec<GalleryEntry>,
}

impl GalleryStore {
    pub fn list(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn add(&mut self, entry: GalleryEntry) {
        debug!({id = %entry.id, variant = %entry.variant()}, "adding gallery entry");
        self.entries.insert(0, entry);
    }

    pub fn remove(&mut self, id: &EntryId) -> Option<GalleryEntry> {
        let pos = self.entries.iter().position(|entry| &entry.id == id)?;
        debug!({id = %id}, "removing gallery entry");
        Some(self.entries.remove(pos))
    }

    pub fn filtered(&self, filter: GalleryFilter) -> impl Iterator<Item = &GalleryEntry> {
        self.entries.iter().filter(move |entry| filter.matches(entry))
    }
}

// new entry form
//
// mirrors the fields of the admin "add to gallery" form.  the form keeps one flat
// set of inputs regardless of variant, and build() turns it into the proper
// EntryBody once the required field for that variant is present
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("blog posts need a title")]
    MissingTitle,
    #[error("{0} entries need a url")]
    MissingUrl(Variant),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryDraft {
    pub variant: Variant,
    pub url: String,
    pub title: String,
    pub caption: String,
}

impl Default for EntryDraft {
    fn default() -> Self {
        EntryDraft {
            variant: Variant::Image,
            url: String::new(),
            title: String::new(),
            caption: String::new(),
        }
    }
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

impl EntryDraft {
    pub fn check(&self) -> Result<(), DraftError> {
        match self.variant {
            Variant::Blog if self.title.is_empty() => Err(DraftError::MissingTitle),
            Variant::Image | Variant::Video if self.url.is_empty() => {
                Err(DraftError::MissingUrl(self.variant))
            }
            _ => Ok(()),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.check().is_ok()
    }

    pub fn build(&self, id: EntryId, today: NaiveDate) -> Result<GalleryEntry, DraftError> {
        self.check()?;

        let caption = if self.caption.is_empty() {
            String::from(DEFAULT_CAPTION)
        } else {
            self.caption.clone()
        };

        let body = match self.variant {
            Variant::Image => EntryBody::Image {
                url: self.url.clone(),
                caption,
            },
            Variant::Video => EntryBody::Video {
                url: self.url.clone(),
                caption,
            },
            Variant::Blog => EntryBody::Blog {
                title: self.title.clone(),
                body: caption,
                cover: Some(self.url.clone()).filter(|url| !url.is_empty()),
            },
        };

        Ok(GalleryEntry {
            id,
            date: Some(display_date(today)),
            body,
        })
    }

    // the variant selector survives a reset, only the inputs are cleared
    pub fn reset(&mut self) {
        self.url.clear();
        self.title.clear();
        self.caption.clear();
    }
}

fn seed(id: &str, date: &str, body: EntryBody) -> GalleryEntry {
    GalleryEntry {
        id: EntryId::from(id),
        date: Some(String::from(date)),
        body,
    }
}

fn seed_entries() -> Vec<GalleryEntry> {
    vec![
        seed(
            "1",
            "Oct 24, 2023",
            EntryBody::Blog {
                title: String::from("The Journey of Motherhood: A Perspective"),
                body: String::from(
                    "Witnessing the transformation of a woman into a mother is the greatest privilege of my profession. In this article, I share insights on emotional well-being during pregnancy and why mental health is just as important as physical health during this delicate time.",
                ),
                cover: Some(String::from(
                    "https://images.unsplash.com/photo-1555252333-9f8e92e65df9?auto=format&fit=crop&q=80&w=800",
                )),
            },
        ),
        seed(
            "2",
            "Nov 12, 2023",
            EntryBody::Image {
                url: String::from(
                    "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?auto=format&fit=crop&q=80&w=800",
                ),
                caption: String::from(
                    "Morning rounds at Aster Royal Al Raffah Hospital. Every chart tells a story.",
                ),
            },
        ),
        seed(
            "3",
            "Dec 05, 2023",
            EntryBody::Video {
                url: String::new(),
                caption: String::from(
                    "Demonstrating minimally invasive surgical techniques to residents.",
                ),
            },
        ),
        seed(
            "4",
            "Jan 10, 2024",
            EntryBody::Image {
                url: String::from(
                    "https://images.unsplash.com/photo-1631217868264-e5b90bb7e133?auto=format&fit=crop&q=80&w=800",
                ),
                caption: String::from(
                    "A moment of quiet reflection between consultations. Empathy starts with listening.",
                ),
            },
        ),
        seed(
            "5",
            "Jan 15, 2024",
            EntryBody::Blog {
                title: String::from("Managing High-Risk Pregnancies"),
                body: String::from(
                    "High-risk does not mean low hope. With modern medicine and close monitoring, complex cases can have beautiful outcomes. Here is what you need to know about gestational diabetes, hypertension, and advanced maternal age.",
                ),
                cover: Some(String::from(
                    "https://images.unsplash.com/photo-1579684385127-1ef15d508118?auto=format&fit=crop&q=80&w=800",
                )),
            },
        ),
        seed(
            "6",
            "Mar 15, 2024",
            EntryBody::Image {
                url: String::from(
                    "https://images.unsplash.com/photo-1532938911079-1b06ac7ceec7?auto=format&fit=crop&q=80&w=800",
                ),
                caption: String::from(
                    "Attending the International OBGYN Conference. Always learning, always improving.",
                ),
            },
        ),
        seed(
            "7",
            "Mar 01, 2024",
            EntryBody::Image {
                url: String::from(
                    "https://images.unsplash.com/photo-1516549655169-df83a0774514?auto=format&fit=crop&q=80&w=800",
                ),
                caption: String::from(
                    "Post-operative care is just as crucial as the surgery itself. Checking in on my patients.",
                ),
            },
        ),
    ]
}

impl GalleryStore {
    // the seed entries go in oldest id first, so the newest-first ordering of
    // add() leaves the highest seed id at the front
    pub fn seeded() -> Self {
        let mut store = GalleryStore::default();
        for entry in seed_entries() {
            store.entries.insert(0, entry);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn ids_are_monotonic() {
        let mut ids = IdGenerator::default();

        assert_eq!(ids.next_at(1000).as_str(), "1000");
        assert_eq!(ids.next_at(1000).as_str(), "1001");
        assert_eq!(ids.next_at(999).as_str(), "1002");
        assert_eq!(ids.next_at(5000).as_str(), "5000");
    }

    #[test]
    fn variant_slugs() {
        for variant in Variant::all() {
            assert_eq!(Variant::from_slug(variant.slug()), Some(variant));
        }
        assert_eq!(Variant::from_slug("audio"), None);
    }

    #[test]
    fn seeded_order_is_newest_first() {
        let store = GalleryStore::seeded();
        let ids: Vec<&str> = store.list().iter().map(|e| e.id.as_str()).collect();

        assert_eq!(ids, vec!["7", "6", "5", "4", "3", "2", "1"]);
    }

    #[test]
    fn remove_returns_the_entry() {
        let mut store = GalleryStore::default();
        store.add(image("a"));
        store.add(image("b"));

        let removed = store.remove(&EntryId::from("a"));
        assert_eq!(removed, Some(image("a")));
        assert_eq!(store.remove(&EntryId::from("a")), None);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn duplicate_ids_are_kept_and_removed_one_at_a_time() {
        let mut older = image("dup");
        older.body = EntryBody::Image {
            url: String::from("http://older"),
            caption: String::from("older"),
        };

        let mut store = GalleryStore::default();
        store.add(older.clone());
        store.add(image("dup"));
        assert_eq!(store.list().len(), 2);

        // the first match in list order goes, which is the newest
        let removed = store.remove(&EntryId::from("dup"));
        assert_eq!(removed, Some(image("dup")));
        assert_eq!(store.list(), &[older]);
    }

    #[test]
    fn filter_by_variant() {
        let store = GalleryStore::seeded();

        assert_eq!(store.filtered(GalleryFilter::All).count(), 7);
        assert_eq!(store.filtered(GalleryFilter::Image).count(), 4);
        assert_eq!(store.filtered(GalleryFilter::Video).count(), 1);
        assert_eq!(store.filtered(GalleryFilter::Blog).count(), 2);
        assert!(
            store
                .filtered(GalleryFilter::Blog)
                .all(|e| e.title().is_some())
        );
    }

    #[test]
    fn draft_requires_url_for_media() {
        let draft = EntryDraft {
            variant: Variant::Video,
            ..EntryDraft::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert!(!draft.is_ready());
        assert_eq!(
            draft.build(EntryId::from("1"), today),
            Err(DraftError::MissingUrl(Variant::Video))
        );
    }

    #[test]
    fn draft_requires_title_for_blog() {
        let mut draft = EntryDraft {
            variant: Variant::Blog,
            url: String::from("http://cover"),
            ..EntryDraft::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(
            draft.build(EntryId::from("1"), today),
            Err(DraftError::MissingTitle)
        );

        draft.title = String::from("Notes");
        let entry = draft.build(EntryId::from("1"), today).unwrap();
        assert_eq!(entry.title(), Some("Notes"));
        assert_eq!(entry.url(), Some("http://cover"));
        assert_eq!(entry.caption(), DEFAULT_CAPTION);
        assert_eq!(entry.date.as_deref(), Some("Mar 1, 2024"));
    }

    #[test]
    fn blog_without_cover() {
        let draft = EntryDraft {
            variant: Variant::Blog,
            title: String::from("Notes"),
            caption: String::from("first\n\n  second  \n"),
            ..EntryDraft::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 10, 24).unwrap();
        let entry = draft.build(EntryId::from("9"), today).unwrap();

        assert_eq!(entry.url(), None);
        assert_eq!(
            entry.paragraphs().collect::<Vec<_>>(),
            vec!["first", "second"]
        );
    }

    #[test]
    fn reset_keeps_variant() {
        let mut draft = EntryDraft {
            variant: Variant::Blog,
            url: String::from("u"),
            title: String::from("t"),
            caption: String::from("c"),
        };
        draft.reset();

        assert_eq!(
            draft,
            EntryDraft {
                variant: Variant::Blog,
                ..EntryDraft::default()
            }
        );
    }
}
