//! Markup emission: the canonical `<link>` element.

use crate::canonical::Normalizer;
use crate::diagnostics::Diagnostics;

/// Renders `<link rel="canonical" href="..." />` for `url`.
///
/// Uses the normalizer's passthrough fallback, so a malformed URL still
/// yields a tag (pointing at the original string) and a diagnostic.
pub fn canonical_link_tag(
    url: &str,
    normalizer: &Normalizer,
    diagnostics: &dyn Diagnostics,
) -> String {
    let href = normalizer.normalize_or_passthrough(url, diagnostics);
    format!(
        "<link rel=\"canonical\" href=\"{}\" />",
        html_escape::encode_double_quoted_attribute(&href)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::tests::Recorder;

    #[test]
    fn link_tag_uses_canonical_url() {
        let rec = Recorder::default();
        let tag = canonical_link_tag(
            "https://example.com/blog/?page=2",
            &Normalizer::default(),
            &rec,
        );
        assert_eq!(
            tag,
            "<link rel=\"canonical\" href=\"https://example.com/blog\" />"
        );
        assert!(rec.malformed.borrow().is_empty());
    }

    #[test]
    fn link_tag_falls_back_on_malformed() {
        let rec = Recorder::default();
        let tag = canonical_link_tag("/blog?a=1&b=\"2\"", &Normalizer::default(), &rec);
        assert_eq!(
            tag,
            "<link rel=\"canonical\" href=\"/blog?a=1&amp;b=&quot;2&quot;\" />"
        );
        assert_eq!(rec.malformed.borrow().len(), 1);
    }
}
