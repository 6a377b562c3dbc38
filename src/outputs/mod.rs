//! Rendering of a scrape run for the terminal.
//!
//! - [`json`]: the whole [`Report`] as pretty-printed JSON
//! - [`text`]: the records' diagnostic `Display` form, grouped by page

pub mod json;
pub mod text;

use nparks_scraper::{EventEntry, FloraFaunaEntry};
use serde::Serialize;

/// Everything one run extracted, plus the sources that could not be loaded.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The date of the run in `YYYY-MM-DD` format.
    pub local_date: String,
    /// The local time of the run.
    pub local_time: String,
    /// `None` when the events page was not requested or failed.
    pub events: Option<Vec<EventEntry>>,
    /// `None` when Flora & Fauna Web was not requested or failed.
    pub flora_fauna: Option<FloraFaunaSection>,
    pub failures: Vec<SourceFailure>,
}

#[derive(Debug, Serialize)]
pub struct FloraFaunaSection {
    pub plant_of_the_month: FloraFaunaEntry,
    pub animal_of_the_month: FloraFaunaEntry,
    pub did_you_know: Vec<FloraFaunaEntry>,
}

/// A page that could be neither fetched nor read from its snapshot.
#[derive(Debug, Serialize)]
pub struct SourceFailure {
    pub source: String,
    pub error: String,
}
