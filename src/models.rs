//! Record types produced by the page builders.
//!
//! - [`FloraFaunaEntry`]: a titled, described, linked item (species of the
//!   month, "did you know" facts)
//! - [`EventEntry`]: the same fields plus date, time and location
//! - [`Record`]: either of the above, for callers that mix sources
//!
//! All three implement [`Entry`]. Fields a selector could not find are
//! `None`. Present links are absolutized once, in the constructor.

use serde::Serialize;
use std::fmt;

/// Origin of every relative link on the scraped pages.
pub const DOMAIN_NAME: &str = "https://www.nparks.gov.sg";

/// Extra path segment event thumbnails are served under.
pub const EVENT_IMAGE_EXT: &str = "/activities/";

/// Prefix that marks a link as already absolute.
const ABSOLUTE_PREFIX: &str = "https://";

/// Make `raw` absolute by prefixing `base` unless it already starts with
/// `https://`.
pub fn absolutize(raw: &str, base: &str) -> String {
    if raw.starts_with(ABSOLUTE_PREFIX) {
        raw.to_string()
    } else {
        format!("{base}{raw}")
    }
}

/// Fields shared by every scraped record.
pub trait Entry {
    fn title(&self) -> Option<&str>;
    fn description(&self) -> Option<&str>;
    /// Absolute link to the item's page.
    fn link(&self) -> Option<&str>;
    /// Absolute link to the item's image.
    fn image_link(&self) -> Option<&str>;
}

/// A species-of-the-month or "did you know" entry from Flora & Fauna Web.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloraFaunaEntry {
    title: Option<String>,
    description: Option<String>,
    link: Option<String>,
    image_link: Option<String>,
}

impl FloraFaunaEntry {
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        link: Option<String>,
        image_link: Option<String>,
    ) -> Self {
        Self {
            title,
            description,
            link: link.map(|l| absolutize(&l, DOMAIN_NAME)),
            image_link: image_link.map(|l| absolutize(&l, DOMAIN_NAME)),
        }
    }
}

impl Entry for FloraFaunaEntry {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    fn image_link(&self) -> Option<&str> {
        self.image_link.as_deref()
    }
}

/// One event or workshop from the activities listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    title: Option<String>,
    description: Option<String>,
    link: Option<String>,
    image_link: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
}

impl EventEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        link: Option<String>,
        image_link: Option<String>,
        date: Option<String>,
        time: Option<String>,
        location: Option<String>,
    ) -> Self {
        let image_base = format!("{DOMAIN_NAME}{EVENT_IMAGE_EXT}");
        Self {
            title,
            description,
            link: link.map(|l| absolutize(&l, DOMAIN_NAME)),
            image_link: image_link.map(|l| absolutize(&l, &image_base)),
            date,
            time,
            location,
        }
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Entry for EventEntry {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    fn image_link(&self) -> Option<&str> {
        self.image_link.as_deref()
    }
}

/// Either kind of scraped record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Event(EventEntry),
    FloraFauna(FloraFaunaEntry),
}

impl Record {
    fn inner(&self) -> &dyn Entry {
        match self {
            Record::Event(e) => e,
            Record::FloraFauna(e) => e,
        }
    }
}

impl Entry for Record {
    fn title(&self) -> Option<&str> {
        self.inner().title()
    }

    fn description(&self) -> Option<&str> {
        self.inner().description()
    }

    fn link(&self) -> Option<&str> {
        self.inner().link()
    }

    fn image_link(&self) -> Option<&str> {
        self.inner().image_link()
    }
}

impl From<EventEntry> for Record {
    fn from(e: EventEntry) -> Self {
        Record::Event(e)
    }
}

impl From<FloraFaunaEntry> for Record {
    fn from(e: FloraFaunaEntry) -> Self {
        Record::FloraFauna(e)
    }
}

fn or_null(field: Option<&str>) -> &str {
    field.unwrap_or("null")
}

impl fmt::Display for FloraFaunaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FFW: [")?;
        writeln!(f, "\tTitle: {},", or_null(self.title()))?;
        writeln!(f, "\tDesc: {},", or_null(self.description()))?;
        writeln!(f, "\tLink: {},", or_null(self.link()))?;
        writeln!(f, "\tImage Link: {}", or_null(self.image_link()))?;
        writeln!(f, "]")
    }
}

impl fmt::Display for EventEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Event: [")?;
        writeln!(f, "\tTitle: {},", or_null(self.title()))?;
        writeln!(f, "\tDesc: {},", or_null(self.description()))?;
        writeln!(f, "\tLink: {},", or_null(self.link()))?;
        writeln!(f, "\tImage Link: {},", or_null(self.image_link()))?;
        writeln!(f, "\tDate: {},", or_null(self.date()))?;
        writeln!(f, "\tTime: {},", or_null(self.time()))?;
        writeln!(f, "\tLocation: {}", or_null(self.location()))?;
        writeln!(f, "]")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Event(e) => e.fmt(f),
            Record::FloraFauna(e) => e.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_absolutize() {
        assert_eq!(absolutize("/e/1", DOMAIN_NAME), "https://www.nparks.gov.sg/e/1");
        assert_eq!(
            absolutize("https://cdn.example/x.jpg", DOMAIN_NAME),
            "https://cdn.example/x.jpg"
        );
        // only the https scheme counts as absolute
        assert_eq!(
            absolutize("http://example.com", DOMAIN_NAME),
            "https://www.nparks.gov.sghttp://example.com"
        );
        assert_eq!(absolutize("", DOMAIN_NAME), DOMAIN_NAME);
    }

    #[test]
    fn test_flora_fauna_links_are_absolutized() {
        let entry = FloraFaunaEntry::new(
            s("Tembusu"),
            s("A native tree."),
            s("/florafaunaweb/flora/1/2/1234"),
            s("/img/plant.jpg"),
        );
        assert_eq!(entry.link(), Some("https://www.nparks.gov.sg/florafaunaweb/flora/1/2/1234"));
        assert_eq!(entry.image_link(), Some("https://www.nparks.gov.sg/img/plant.jpg"));
    }

    #[test]
    fn test_absolute_links_are_untouched() {
        let entry = FloraFaunaEntry::new(
            None,
            None,
            s("https://www.nparks.gov.sg/x"),
            s("https://images.example.org/y.png"),
        );
        assert_eq!(entry.link(), Some("https://www.nparks.gov.sg/x"));
        assert_eq!(entry.image_link(), Some("https://images.example.org/y.png"));
    }

    #[test]
    fn test_event_image_uses_activities_segment() {
        let event = EventEntry::new(
            s("Bird Walk"),
            s("A walk."),
            s("/e/1"),
            s("images/walk.jpg"),
            s("2024-01-01"),
            s("9am"),
            s("Park"),
        );
        assert_eq!(event.link(), Some("https://www.nparks.gov.sg/e/1"));
        assert_eq!(
            event.image_link(),
            Some("https://www.nparks.gov.sg/activities/images/walk.jpg")
        );
        assert_eq!(event.date(), Some("2024-01-01"));
        assert_eq!(event.time(), Some("9am"));
        assert_eq!(event.location(), Some("Park"));
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let event = EventEntry::new(None, None, None, None, None, None, None);
        assert_eq!(event.link(), None);
        assert_eq!(event.image_link(), None);
        assert_eq!(event.location(), None);
    }

    #[test]
    fn test_record_delegates_to_variant() {
        let records: Vec<Record> = vec![
            EventEntry::new(s("Walk"), None, s("/e/1"), None, None, None, None).into(),
            FloraFaunaEntry::new(s("Otter"), None, s("/a/2"), None).into(),
        ];
        let titles: Vec<_> = records.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec![Some("Walk"), Some("Otter")]);
        assert!(records.iter().all(|r| r.link().unwrap().starts_with("https://")));
    }

    #[test]
    fn test_display_renders_every_field() {
        let event =
            EventEntry::new(s("Walk"), None, s("/e/1"), None, s("Sat"), s("9am"), s("Park"));
        let rendered = event.to_string();
        assert!(rendered.starts_with("Event: ["));
        assert!(rendered.contains("\tTitle: Walk,"));
        assert!(rendered.contains("\tDesc: null,"));
        assert!(rendered.contains("\tLink: https://www.nparks.gov.sg/e/1,"));
        assert!(rendered.contains("\tLocation: Park"));

        let fact = FloraFaunaEntry::new(s("Otter"), None, None, None);
        assert!(fact.to_string().starts_with("FFW: ["));
    }

    #[test]
    fn test_record_serialization_is_tagged() {
        let record = Record::from(FloraFaunaEntry::new(s("Otter"), None, None, s("/o.jpg")));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "flora_fauna");
        assert_eq!(json["title"], "Otter");
        assert_eq!(json["image_link"], "https://www.nparks.gov.sg/o.jpg");
        assert!(json["description"].is_null());
    }
}
