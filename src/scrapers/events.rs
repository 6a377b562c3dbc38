//! NParks events and workshops listing.
//!
//! The listing at <https://www.nparks.gov.sg/activities/events-and-workshops>
//! renders each event as an `li.event` card. Every card is extracted on its
//! own, so two cards never mix fields.

use crate::config::SourceConfig;
use crate::error::AcquisitionError;
use crate::models::EventEntry;
use crate::query::Page;
use crate::scrapers::schema::{EntrySchema, FieldRule, ListSchema};
use crate::source::{acquire, acquire_file};
use once_cell::sync::Lazy;
use scraper::ElementRef;
use std::path::Path;
use tracing::{info, instrument};

pub const EVENTS_URL: &str = "https://www.nparks.gov.sg/activities/events-and-workshops";
pub const EVENTS_FALLBACK: &str = "EventCache.html";

/// Selectors for one event card, relative to the card.
#[derive(Debug)]
pub struct EventSchema {
    pub entry: EntrySchema,
    pub date: FieldRule,
    pub time: FieldRule,
    pub location: FieldRule,
}

impl EventSchema {
    fn extract<'a>(&self, page: &'a Page, card: ElementRef<'a>) -> EventEntry {
        let raw = self.entry.extract(page, Some(card));
        EventEntry::new(
            raw.title,
            raw.description,
            raw.link,
            raw.image_link,
            self.date.extract(page, Some(card)),
            self.time.extract(page, Some(card)),
            self.location.extract(page, Some(card)),
        )
    }
}

pub static EVENT_LIST: Lazy<ListSchema<EventSchema>> = Lazy::new(|| {
    ListSchema::new(
        "li.event",
        EventSchema {
            entry: EntrySchema {
                title: FieldRule::text("h3.title-event a"),
                description: FieldRule::text("div.summary"),
                link: FieldRule::attr("h3.title-event a", "href"),
                image_link: FieldRule::attr("div.thumbnail-event a img", "src"),
            },
            date: FieldRule::text("div.duration span.date"),
            time: FieldRule::text("div.duration span.time"),
            location: FieldRule::text("div.location span"),
        },
    )
});

/// Extracts [`EventEntry`] records from one cached copy of the events page.
#[derive(Debug)]
pub struct EventInfo {
    page: Page,
}

impl EventInfo {
    /// Fetch the live events page, falling back to `EventCache.html`.
    pub async fn new() -> Result<Self, AcquisitionError> {
        Self::connect(&SourceConfig::events()).await
    }

    /// Fetch the events page described by `source`, falling back to its
    /// snapshot.
    ///
    /// # Arguments
    ///
    /// * `source` - Live URL and fallback snapshot path
    ///
    /// # Returns
    ///
    /// A builder holding the parsed page, or [`AcquisitionError::Unavailable`]
    /// when neither the URL nor the snapshot could be loaded. A failed fetch
    /// alone is only logged.
    #[instrument(level = "info", skip_all, fields(url = %source.url))]
    pub async fn connect(source: &SourceConfig) -> Result<Self, AcquisitionError> {
        let page = acquire(&source.url, &source.fallback_path).await?;
        info!("Events page ready");
        Ok(Self::from_page(page))
    }

    /// Read a saved copy of the events page without going online.
    ///
    /// # Arguments
    ///
    /// * `path` - HTML snapshot; bytes that are not UTF-8 become U+FFFD
    ///
    /// # Returns
    ///
    /// A builder over the snapshot, or [`AcquisitionError::Read`] if the file
    /// cannot be read.
    pub async fn from_file(path: &Path) -> Result<Self, AcquisitionError> {
        Ok(Self::from_page(acquire_file(path).await?))
    }

    /// Wrap a page that has already been parsed, e.g. from an HTTP cache.
    pub fn from_page(page: Page) -> Self {
        Self { page }
    }

    /// The cached page every query runs against.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Every event on the page, in page order. Records are built lazily;
    /// call again to start over.
    pub fn events(&self) -> impl Iterator<Item = EventEntry> + '_ {
        let schema = &*EVENT_LIST;
        self.page
            .all_matches(&schema.container)
            .into_iter()
            .map(move |card| schema.item.extract(&self.page, card))
    }
}
