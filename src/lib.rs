//! # NParks Scraper
//!
//! Pulls structured records out of two National Parks Board pages:
//!
//! - the events and workshops listing, one [`EventEntry`] per event
//! - Flora & Fauna Web, the plant and animal of the month plus "did you know"
//!   facts as [`FloraFaunaEntry`] records
//!
//! ## Architecture
//!
//! 1. **Acquisition** ([`source`]): fetch the live page once; if that fails
//!    for any reason, parse the saved snapshot instead
//! 2. **Querying** ([`query`]): null-safe CSS selector accessors over the
//!    parsed page
//! 3. **Extraction** ([`scrapers`]): fixed selector tables per page, mapped
//!    into immutable records with absolute links ([`models`])
//!
//! ```no_run
//! use nparks_scraper::{EventInfo, Entry};
//!
//! # async fn run() -> Result<(), nparks_scraper::error::AcquisitionError> {
//! let info = EventInfo::new().await?;
//! for event in info.events() {
//!     println!("{} on {}", event.title().unwrap_or("?"), event.date().unwrap_or("?"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod scrapers;
pub mod source;
pub mod utils;

pub use config::{ScraperConfig, SourceConfig, load_config};
pub use error::{AcquisitionError, ConfigError};
pub use models::{Entry, EventEntry, FloraFaunaEntry, Record};
pub use query::Page;
pub use scrapers::events::EventInfo;
pub use scrapers::flora_fauna::FloraFaunaInfo;
pub use source::{acquire, acquire_file};
