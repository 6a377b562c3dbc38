//! Page acquisition: live fetch with a single fallback to a saved snapshot.
//!
//! [`acquire`] tries the network once. Any failure there (transport error,
//! non-2xx status, unreadable body) is logged and swallowed, and the local
//! snapshot is parsed instead. Only when the snapshot is unreadable too does
//! the caller see an [`AcquisitionError`]. [`acquire_file`] skips the network
//! entirely.

use crate::error::AcquisitionError;
use crate::query::Page;
use crate::utils::truncate_for_log;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Fetch and parse `url`, falling back to the snapshot at `fallback_path`.
#[instrument(level = "info", skip_all, fields(%url, fallback = %fallback_path.display()))]
pub async fn acquire(url: &Url, fallback_path: &Path) -> Result<Page, AcquisitionError> {
    match fetch(url).await {
        Ok(body) => {
            info!(bytes = body.len(), "Fetched live page");
            debug!(preview = %truncate_for_log(&body, 200), "Live page body");
            Ok(Page::parse(&body))
        }
        Err(network) => {
            warn!(error = %network, "Live fetch failed; using fallback snapshot");
            acquire_file(fallback_path).await.map_err(|err| match err {
                AcquisitionError::Read { path, source } => AcquisitionError::Unavailable {
                    url: url.to_string(),
                    network: network.to_string(),
                    path,
                    source,
                },
                other => other,
            })
        }
    }
}

/// Parse a saved snapshot without touching the network.
///
/// The file is decoded as UTF-8, replacing invalid sequences, so only a
/// genuine I/O failure is an error.
///
/// # Errors
///
/// [`AcquisitionError::Read`] if the file cannot be opened or read.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn acquire_file(path: &Path) -> Result<Page, AcquisitionError> {
    let bytes = fs::read(path).await.map_err(|source| AcquisitionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // stray non-UTF-8 bytes become U+FFFD rather than failing the page
    let body = String::from_utf8_lossy(&bytes);
    info!(bytes = bytes.len(), "Loaded page snapshot");
    Ok(Page::parse(&body))
}

async fn fetch(url: &Url) -> Result<String, reqwest::Error> {
    reqwest::get(url.as_str())
        .await?
        .error_for_status()?
        .text()
        .await
}
