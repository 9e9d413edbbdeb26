//! Legacy path table: previously published paths and their canonical replacements.
//!
//! The same table drives both the normalizer's path rewriting and the
//! permanent redirect rules, so the two can never disagree. Rules match
//! substrings of the serialized (percent-encoded) URL path.

mod redirect;
mod validate;

pub use redirect::{redirects_json, RedirectRule};
pub use validate::{PathProblem, TableError};

use serde::{Deserialize, Serialize};

/// One legacy mapping: every occurrence of `from` in a path becomes `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyPathRule {
    pub from: String,
    pub to: String,
}

impl LegacyPathRule {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Result of applying the table to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub path: String,
    /// Rules applied, in the order they fired.
    pub applied: Vec<LegacyPathRule>,
}

impl Rewrite {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Validated, ordered set of legacy path rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyPathTable {
    rules: Vec<LegacyPathRule>,
}

impl LegacyPathTable {
    /// Builds a table after checking every rule (see [`TableError`]).
    pub fn new(rules: Vec<LegacyPathRule>) -> Result<Self, TableError> {
        validate::validate_rules(&rules)?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[LegacyPathRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rewrites every legacy fragment in `path`.
    ///
    /// Rules are tried in table order (first match wins on overlapping
    /// sources) and each one replaces all of its occurrences. Validation
    /// guarantees a rule's output never forms a new occurrence of any source,
    /// so one sweep leaves a path no rule matches.
    pub fn rewrite(&self, path: &str) -> Rewrite {
        let mut current = path.to_string();
        let mut applied = Vec::new();

        for rule in &self.rules {
            if current.contains(rule.from.as_str()) {
                current = current.replace(rule.from.as_str(), &rule.to);
                applied.push(rule.clone());
            }
        }

        Rewrite {
            path: current,
            applied,
        }
    }

    /// Permanent redirects, one per rule, in table order.
    pub fn redirect_rules(&self) -> Vec<RedirectRule> {
        self.rules
            .iter()
            .map(|r| RedirectRule::permanent(&r.from, &r.to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rules: &[(&str, &str)]) -> LegacyPathTable {
        LegacyPathTable::new(
            rules
                .iter()
                .map(|(f, t)| LegacyPathRule::new(*f, *t))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn rewrite_no_match_is_unchanged() {
        let t = table(&[("/services/ai.agents", "/services/ai-agents")]);
        let r = t.rewrite("/about");
        assert_eq!(r.path, "/about");
        assert!(!r.changed());
    }

    #[test]
    fn rewrite_substring_match() {
        let t = table(&[("/services/ai.agents", "/services/ai-agents")]);
        let r = t.rewrite("/en/services/ai.agents/pricing");
        assert_eq!(r.path, "/en/services/ai-agents/pricing");
        let expected = LegacyPathRule::new("/services/ai.agents", "/services/ai-agents");
        assert_eq!(r.applied, vec![expected]);
    }

    #[test]
    fn rewrite_replaces_every_occurrence() {
        let t = table(&[("/a.b", "/a-b")]);
        assert_eq!(t.rewrite("/a.b/x/a.b").path, "/a-b/x/a-b");
    }

    #[test]
    fn first_match_wins_in_table_order() {
        // Both sources occur in "/blog/v1.0/post"; the earlier rule fires and
        // the later one no longer matches its output.
        let t = table(&[("/blog/v1.0", "/blog/v1-0"), ("/v1.0", "/version-1")]);
        let r = t.rewrite("/blog/v1.0/post");
        assert_eq!(r.path, "/blog/v1-0/post");
        assert_eq!(r.applied.len(), 1);

        let swapped = table(&[("/v1.0", "/version-1"), ("/blog/v1.0", "/blog/v1-0")]);
        assert_eq!(
            swapped.rewrite("/blog/v1.0/post").path,
            "/blog/version-1/post"
        );
    }

    #[test]
    fn independent_fragments_all_rewritten() {
        let t = table(&[("/a.b", "/a-b"), ("/c.d", "/c-d")]);
        let r = t.rewrite("/c.d/a.b");
        assert_eq!(r.path, "/c-d/a-b");
        assert_eq!(r.applied.len(), 2);
        // Output is a fixed point.
        assert!(!t.rewrite(&r.path).changed());
    }

    #[test]
    fn redirect_rules_follow_table_order() {
        let t = table(&[("/a.b", "/a-b"), ("/c.d", "/c-d")]);
        let redirects = t.redirect_rules();
        assert_eq!(redirects.len(), 2);
        assert_eq!(redirects[0].source, "/a.b");
        assert_eq!(redirects[0].destination, "/a-b");
        assert!(redirects.iter().all(|r| r.permanent));
        assert_eq!(redirects[1].source, "/c.d");
    }

    #[test]
    fn empty_table() {
        let t = LegacyPathTable::default();
        assert!(t.is_empty());
        assert!(t.redirect_rules().is_empty());
        assert_eq!(t.rewrite("/x/").path, "/x/");
    }
}
