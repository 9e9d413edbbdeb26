//! Canonical-form report used by the `check` command.

use crate::legacy::LegacyPathRule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalReport {
    pub input: String,
    pub canonical: String,
    pub query_removed: bool,
    pub legacy_rules: Vec<LegacyPathRule>,
    pub trailing_slash_trimmed: bool,
}

impl CanonicalReport {
    /// True if `input` is already byte-for-byte canonical.
    pub fn is_canonical(&self) -> bool {
        self.input == self.canonical
    }

    /// Human-readable list of the steps that changed the URL.
    pub fn changes(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.query_removed {
            out.push("query string removed".to_string());
        }
        for rule in &self.legacy_rules {
            out.push(format!("legacy path {} -> {}", rule.from, rule.to));
        }
        if self.trailing_slash_trimmed {
            out.push("trailing slash trimmed".to_string());
        }
        if out.is_empty() && !self.is_canonical() {
            // Parser-level serialization only (host case, default port, encoding).
            out.push("re-serialized".to_string());
        }
        out
    }
}
