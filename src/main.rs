//! # NParks Scraper CLI
//!
//! Scrapes the NParks events listing and Flora & Fauna Web, then prints the
//! extracted records as text or JSON on stdout. Logs go to stderr.
//!
//! ## Usage
//!
//! ```sh
//! nparks_scraper --format json
//! RUST_LOG=debug nparks_scraper --source events --offline
//! ```
//!
//! Both pages are loaded concurrently. A page that can be neither fetched
//! nor read from its snapshot is reported and skipped; the run only fails
//! when every requested page is unavailable.

use chrono::Local;
use clap::Parser;
use nparks_scraper::{
    AcquisitionError, EventInfo, FloraFaunaInfo, ScraperConfig, SourceConfig, load_config,
};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod outputs;

use cli::{Cli, Format};
use outputs::{FloraFaunaSection, Report, SourceFailure, json, text};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("nparks_scraper starting up");

    let args = Cli::parse();
    debug!(?args.source, ?args.format, offline = args.offline, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => load_config(path).await?,
        None => ScraperConfig::default(),
    };

    let events_task = async {
        if !args.source.includes_events() {
            return None;
        }
        let info = if args.offline {
            EventInfo::from_file(&config.events.fallback_path).await
        } else {
            EventInfo::connect(&config.events).await
        };
        Some(info.map(|info| info.events().collect::<Vec<_>>()))
    };

    let flora_fauna_task = async {
        if !args.source.includes_flora_fauna() {
            return None;
        }
        let info = if args.offline {
            FloraFaunaInfo::from_file(&config.flora_fauna.fallback_path).await
        } else {
            FloraFaunaInfo::connect(&config.flora_fauna).await
        };
        Some(info.map(|info| FloraFaunaSection {
            plant_of_the_month: info.plant_of_the_month(),
            animal_of_the_month: info.animal_of_the_month(),
            did_you_know: info.did_you_know_facts().collect(),
        }))
    };

    let (events, flora_fauna) = futures::join!(events_task, flora_fauna_task);

    let mut failures = Vec::new();
    let events = settle("events", &config.events, events, &mut failures);
    let flora_fauna = settle("flora_fauna", &config.flora_fauna, flora_fauna, &mut failures);

    let requested = usize::from(args.source.includes_events())
        + usize::from(args.source.includes_flora_fauna());
    let all_failed = failures.len() == requested;

    let now = Local::now();
    let report = Report {
        local_date: now.date_naive().to_string(),
        local_time: now.time().format("%H:%M:%S").to_string(),
        events,
        flora_fauna,
        failures,
    };

    let rendered = match args.format {
        Format::Text => text::render(&report),
        Format::Json => json::render(&report)?,
    };
    println!("{rendered}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        events = report.events.as_ref().map_or(0, Vec::len),
        failures = report.failures.len(),
        "Execution complete"
    );

    if all_failed {
        return Err("no requested page could be loaded".into());
    }
    Ok(())
}

/// Fold one source's outcome into the report, recording failures without
/// aborting the other source.
fn settle<T>(
    name: &str,
    source: &SourceConfig,
    outcome: Option<Result<T, AcquisitionError>>,
    failures: &mut Vec<SourceFailure>,
) -> Option<T> {
    match outcome? {
        Ok(value) => Some(value),
        Err(e) => {
            error!(source = name, url = %source.url, error = %e, "Page unavailable");
            failures.push(SourceFailure {
                source: name.to_string(),
                error: e.to_string(),
            });
            None
        }
    }
}
