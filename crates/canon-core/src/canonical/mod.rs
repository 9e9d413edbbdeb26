//! Canonical URL normalization.
//!
//! A canonical URL is the single form used for `<link rel="canonical">`,
//! sitemap `<loc>` entries and redirect targets:
//! - the query component is removed,
//! - legacy path fragments are rewritten through the [`LegacyPathTable`],
//! - trailing slashes are trimmed unless the path is exactly `/`.
//!
//! Scheme, host and fragment are carried over as serialized by the `url` crate.
//! Normalizing a canonical URL returns it unchanged.

mod check;
mod error;
mod path;

pub use check::CanonicalReport;
pub use error::NormalizeError;

use url::Url;

use crate::config::CanonConfig;
use crate::diagnostics::Diagnostics;
use crate::legacy::{LegacyPathRule, LegacyPathTable, TableError};

/// Normalizes URLs against a fixed legacy path table.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    legacy: LegacyPathTable,
}

/// Internal result: the canonical URL plus what changed on the way.
struct Canonicalized {
    url: String,
    query_removed: bool,
    legacy_rules: Vec<LegacyPathRule>,
    trailing_slash_trimmed: bool,
}

impl Normalizer {
    pub fn new(legacy: LegacyPathTable) -> Self {
        Self { legacy }
    }

    /// Builds a normalizer from the `legacy_paths` of a loaded config.
    pub fn from_config(cfg: &CanonConfig) -> Result<Self, TableError> {
        Ok(Self::new(LegacyPathTable::new(cfg.legacy_paths.clone())?))
    }

    pub fn legacy_paths(&self) -> &LegacyPathTable {
        &self.legacy
    }

    /// Returns the canonical form of `input`.
    ///
    /// # Examples
    ///
    /// - `https://example.com/pricing/?ref=nav` → `https://example.com/pricing`
    /// - `https://example.com/` → `https://example.com/`
    pub fn normalize(&self, input: &str) -> Result<String, NormalizeError> {
        self.canonicalize(input).map(|c| c.url)
    }

    /// Like [`normalize`](Self::normalize), but never fails.
    ///
    /// On error the condition is reported to `diagnostics` and `input` is
    /// returned unmodified, so page and sitemap rendering keep going.
    pub fn normalize_or_passthrough(&self, input: &str, diagnostics: &dyn Diagnostics) -> String {
        match self.normalize(input) {
            Ok(url) => url,
            Err(err) => {
                diagnostics.malformed(input, &err);
                input.to_string()
            }
        }
    }

    /// Reports whether `input` is canonical and which steps would change it.
    pub fn check(&self, input: &str) -> Result<CanonicalReport, NormalizeError> {
        let c = self.canonicalize(input)?;
        Ok(CanonicalReport {
            input: input.to_string(),
            canonical: c.url,
            query_removed: c.query_removed,
            legacy_rules: c.legacy_rules,
            trailing_slash_trimmed: c.trailing_slash_trimmed,
        })
    }

    fn canonicalize(&self, input: &str) -> Result<Canonicalized, NormalizeError> {
        let mut url = Url::parse(input).map_err(|source| NormalizeError::MalformedInput {
            input: input.to_string(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(NormalizeError::OpaquePath {
                input: input.to_string(),
            });
        }

        let query_removed = url.query().is_some();
        url.set_query(None);

        let rewrite = self.legacy.rewrite(url.path());
        let path = path::trim_trailing_slashes(&rewrite.path);
        let trailing_slash_trimmed = path.len() != rewrite.path.len();
        if rewrite.changed() || trailing_slash_trimmed {
            url.set_path(path);
        }

        Ok(Canonicalized {
            url: url.into(),
            query_removed,
            legacy_rules: rewrite.applied,
            trailing_slash_trimmed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::Recorder;

    fn normalizer() -> Normalizer {
        Normalizer::new(
            LegacyPathTable::new(vec![
                LegacyPathRule::new("/services/ai.agents", "/services/ai-agents"),
                LegacyPathRule::new("/products/voice.ai", "/products/voice-ai"),
            ])
            .unwrap(),
        )
    }

    fn canon(input: &str) -> String {
        normalizer().normalize(input).unwrap()
    }

    #[test]
    fn removes_query() {
        assert_eq!(
            canon("https://example.com/pricing?utm_source=x&ref=nav"),
            "https://example.com/pricing"
        );
        assert_eq!(
            canon("https://example.com/pricing?"),
            "https://example.com/pricing"
        );
    }

    #[test]
    fn trims_trailing_slash() {
        assert_eq!(
            canon("https://example.com/about/"),
            "https://example.com/about"
        );
        assert_eq!(
            canon("https://example.com/a/b//"),
            "https://example.com/a/b"
        );
    }

    #[test]
    fn root_path_kept() {
        for input in [
            "https://example.com/",
            "https://example.com",
            "https://example.com/?q=1",
            "https://example.com//",
        ] {
            assert_eq!(canon(input), "https://example.com/");
        }
    }

    #[test]
    fn rewrites_legacy_paths() {
        assert_eq!(
            canon("https://example.com/services/ai.agents"),
            "https://example.com/services/ai-agents"
        );
        assert_eq!(
            canon("https://example.com/products/voice.ai/?plan=pro"),
            "https://example.com/products/voice-ai"
        );
    }

    #[test]
    fn keeps_fragment_and_host() {
        assert_eq!(
            canon("http://www.example.com:8080/docs/?x=1#install"),
            "http://www.example.com:8080/docs#install"
        );
    }

    #[test]
    fn idempotent() {
        for input in [
            "https://example.com/",
            "https://example.com/about/?a=b",
            "https://example.com/services/ai.agents/",
            "https://example.com/products/voice.ai/demo//?x#top",
            "https://example.com/caf%C3%A9/",
            "https://EXAMPLE.com/Path/",
            "foo://host/a/",
        ] {
            let once = canon(input);
            assert_eq!(canon(&once), once, "not idempotent for {input}");
        }
    }

    #[test]
    fn long_paths_normalize_with_validated_table() {
        // A table whose destination re-forms its own source never gets this far.
        let regrowing = vec![LegacyPathRule::new("/ab", "/a")];
        assert!(LegacyPathTable::new(regrowing).is_err());

        let rules = vec![LegacyPathRule::new("/ab.c", "/ab-c")];
        let n = Normalizer::new(LegacyPathTable::new(rules).unwrap());
        let tail = "b".repeat(20);
        let once = n.normalize(&format!("https://e.com/ab.c{tail}")).unwrap();
        assert_eq!(once, format!("https://e.com/ab-c{tail}"));
        assert_eq!(n.normalize(&once).unwrap(), once);
    }

    #[test]
    fn malformed_input_errors() {
        let n = normalizer();
        let err = n.normalize("example.com/about").unwrap_err();
        assert!(matches!(err, NormalizeError::MalformedInput { .. }));
        assert!(err.is_malformed_input());

        let err = n.normalize("mailto:hello@example.com").unwrap_err();
        assert!(matches!(err, NormalizeError::OpaquePath { .. }));
        assert!(err.is_malformed_input());
    }

    #[test]
    fn passthrough_returns_original_and_reports() {
        let n = normalizer();
        let rec = Recorder::default();
        assert_eq!(n.normalize_or_passthrough("not a url", &rec), "not a url");
        assert_eq!(*rec.malformed.borrow(), vec!["not a url".to_string()]);

        let url = n.normalize_or_passthrough("https://example.com/x/", &rec);
        assert_eq!(url, "https://example.com/x");
        assert_eq!(rec.malformed.borrow().len(), 1);
    }

    #[test]
    fn check_reports_steps() {
        let n = normalizer();
        let input = "https://example.com/services/ai.agents/?ref=1";
        let report = n.check(input).unwrap();
        assert_eq!(report.canonical, "https://example.com/services/ai-agents");
        assert!(report.query_removed);
        assert!(report.trailing_slash_trimmed);
        assert_eq!(report.legacy_rules.len(), 1);
        assert!(!report.is_canonical());

        let report = n.check("https://example.com/services/ai-agents").unwrap();
        assert!(report.is_canonical());
        assert!(report.changes().is_empty());
    }
}
