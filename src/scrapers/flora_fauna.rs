//! Flora & Fauna Web landing page.
//!
//! The page at <https://www.nparks.gov.sg/FloraFaunaWeb> features a plant
//! and an animal of the month plus a carousel of "did you know" facts.

use crate::config::SourceConfig;
use crate::error::AcquisitionError;
use crate::models::FloraFaunaEntry;
use crate::query::Page;
use crate::scrapers::schema::{EntrySchema, FieldRule, ListSchema, RawEntry};
use crate::source::{acquire, acquire_file};
use once_cell::sync::Lazy;
use std::path::Path;
use tracing::{info, instrument};

pub const FLORA_FAUNA_URL: &str = "https://www.nparks.gov.sg/FloraFaunaWeb";
pub const FLORA_FAUNA_FALLBACK: &str = "FFWCache.html";

/// Species-of-the-month section; `kind` is the modifier class
/// (`plant` or `animal`) on the section's wrapper div.
fn species_of_month(kind: &str) -> EntrySchema {
    let section = format!("div.species-of-month.{kind}");
    EntrySchema {
        title: FieldRule::text(format!("{section} h4.species-of-month__name")),
        description: FieldRule::text(format!("{section} p.species-of-month__desc")),
        link: FieldRule::attr(format!("{section} div.species-of-month__link a"), "href"),
        image_link: FieldRule::attr(format!("{section} div.species-of-month__image img"), "src"),
    }
}

pub static PLANT_OF_THE_MONTH: Lazy<EntrySchema> = Lazy::new(|| species_of_month("plant"));
pub static ANIMAL_OF_THE_MONTH: Lazy<EntrySchema> = Lazy::new(|| species_of_month("animal"));

pub static DID_YOU_KNOW: Lazy<ListSchema<EntrySchema>> = Lazy::new(|| {
    ListSchema::new(
        "div.did-you-know__item",
        EntrySchema {
            title: FieldRule::text("h4.name"),
            description: FieldRule::text("p.rte"),
            link: FieldRule::attr("a", "href"),
            image_link: FieldRule::attr("img", "src"),
        },
    )
});

fn to_entry(raw: RawEntry) -> FloraFaunaEntry {
    FloraFaunaEntry::new(raw.title, raw.description, raw.link, raw.image_link)
}

/// Extracts [`FloraFaunaEntry`] records from one cached copy of the
/// Flora & Fauna Web page.
#[derive(Debug)]
pub struct FloraFaunaInfo {
    page: Page,
}

impl FloraFaunaInfo {
    /// Fetch the live page, falling back to `FFWCache.html`.
    pub async fn new() -> Result<Self, AcquisitionError> {
        Self::connect(&SourceConfig::flora_fauna()).await
    }

    /// Fetch the page described by `source`, falling back to its snapshot.
    ///
    /// # Arguments
    ///
    /// * `source` - Live URL and fallback snapshot path
    ///
    /// # Returns
    ///
    /// A builder holding the parsed page, or [`AcquisitionError::Unavailable`]
    /// when neither the URL nor the snapshot could be loaded.
    #[instrument(level = "info", skip_all, fields(url = %source.url))]
    pub async fn connect(source: &SourceConfig) -> Result<Self, AcquisitionError> {
        let page = acquire(&source.url, &source.fallback_path).await?;
        info!("Flora & Fauna page ready");
        Ok(Self::from_page(page))
    }

    /// Read a saved copy of the page without going online.
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

    /// Wrap a page that has already been parsed.
    pub fn from_page(page: Page) -> Self {
        Self { page }
    }

    /// The cached page every query runs against.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The featured plant of the month.
    ///
    /// Queries the `div.species-of-month.plant` section of the whole page.
    ///
    /// # Returns
    ///
    /// A [`FloraFaunaEntry`] whose fields are `None` wherever the section
    /// (or one of its parts) is missing. Links are absolute.
    pub fn plant_of_the_month(&self) -> FloraFaunaEntry {
        to_entry(PLANT_OF_THE_MONTH.extract(&self.page, None))
    }

    /// The featured animal of the month, from `div.species-of-month.animal`.
    ///
    /// Missing parts become `None`, as for [`Self::plant_of_the_month`].
    pub fn animal_of_the_month(&self) -> FloraFaunaEntry {
        to_entry(ANIMAL_OF_THE_MONTH.extract(&self.page, None))
    }

    /// Each "did you know" card, in page order.
    pub fn did_you_know_facts(&self) -> impl Iterator<Item = FloraFaunaEntry> + '_ {
        let schema = &*DID_YOU_KNOW;
        self.page
            .all_matches(&schema.container)
            .into_iter()
            .map(move |card| to_entry(schema.item.extract(&self.page, Some(card))))
    }
}
