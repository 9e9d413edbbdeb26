//! Redirect rules derived from the legacy path table.

use serde::Serialize;

use super::LegacyPathTable;

/// A single redirect entry, serialized in the `{ source, destination, permanent }`
/// shape framework redirect tables expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectRule {
    pub source: String,
    pub destination: String,
    pub permanent: bool,
}

impl RedirectRule {
    pub fn permanent(source: &str, destination: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            permanent: true,
        }
    }
}

/// Pretty-printed JSON array of the table's redirect rules.
pub fn redirects_json(table: &LegacyPathTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&table.redirect_rules())
}
