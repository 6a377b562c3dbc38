//! Source configuration: which URL to fetch and which snapshot to fall back
//! on, per page.
//!
//! The defaults point at the live NParks pages and the snapshot files in the
//! working directory. A YAML file can override either source:
//!
//! ```yaml
//! events:
//!   url: https://www.nparks.gov.sg/activities/events-and-workshops
//!   fallback_path: cache/EventCache.html
//! ```

use crate::error::ConfigError;
use crate::scrapers::events::{EVENTS_FALLBACK, EVENTS_URL};
use crate::scrapers::flora_fauna::{FLORA_FAUNA_FALLBACK, FLORA_FAUNA_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Where one page comes from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    pub url: Url,
    pub fallback_path: PathBuf,
}

impl SourceConfig {
    fn builtin(url: &str, fallback: &str) -> Self {
        Self {
            url: Url::parse(url).expect("built-in source URL is valid"),
            fallback_path: PathBuf::from(fallback),
        }
    }

    pub fn events() -> Self {
        Self::builtin(EVENTS_URL, EVENTS_FALLBACK)
    }

    pub fn flora_fauna() -> Self {
        Self::builtin(FLORA_FAUNA_URL, FLORA_FAUNA_FALLBACK)
    }
}

/// Sources for both pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub events: SourceConfig,
    pub flora_fauna: SourceConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            events: SourceConfig::events(),
            flora_fauna: SourceConfig::flora_fauna(),
        }
    }
}

/// Load a YAML config; sections left out keep their defaults.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_config(path: &Path) -> Result<ScraperConfig, ConfigError> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let config = parse_config(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        events = %config.events.url,
        flora_fauna = %config.flora_fauna.url,
        "Loaded configuration"
    );
    Ok(config)
}

fn parse_config(text: &str) -> Result<ScraperConfig, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(ScraperConfig::default());
    }
    serde_yaml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.events.url.as_str(), EVENTS_URL);
        assert_eq!(config.events.fallback_path, PathBuf::from("EventCache.html"));
        assert_eq!(config.flora_fauna.url.as_str(), FLORA_FAUNA_URL);
        assert_eq!(config.flora_fauna.fallback_path, PathBuf::from("FFWCache.html"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let yaml = r#"
events:
  url: http://localhost:8080/events
  fallback_path: cache/events.html
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.events.url.as_str(), "http://localhost:8080/events");
        assert_eq!(config.events.fallback_path, PathBuf::from("cache/events.html"));
        assert_eq!(config.flora_fauna, SourceConfig::flora_fauna());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config("\n").unwrap(), ScraperConfig::default());
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let yaml = "events:\n  url: not a url\n  fallback_path: x.html\n";
        assert!(parse_config(yaml).is_err());
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "flora_fauna:").unwrap();
        writeln!(file, "  url: https://example.org/ffw").unwrap();
        writeln!(file, "  fallback_path: /tmp/ffw.html").unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.flora_fauna.url.as_str(), "https://example.org/ffw");
        assert_eq!(config.events, SourceConfig::events());
    }

    #[tokio::test]
    async fn test_load_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            load_config(&missing).await,
            Err(ConfigError::Read { .. })
        ));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "events: [1, 2").unwrap();
        assert!(matches!(
            load_config(bad.path()).await,
            Err(ConfigError::Parse { .. })
        ));
    }
}
