//! JSON rendering of a [`Report`].

use super::Report;

/// Serialize the report as pretty-printed JSON.
pub fn render(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
