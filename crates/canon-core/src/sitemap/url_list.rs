//! Plain-text URL list input for sitemap rendering.
//!
//! One URL per line, optionally followed by whitespace and a `lastmod` value.
//! Blank lines and `#` comments are skipped.

use url::Url;

use super::SitemapEntry;

/// Parses a URL list.
///
/// Origin-relative lines (a single leading `/`, not the scheme-relative
/// `//host`) are resolved against `origin` when one is given. Otherwise they
/// are kept verbatim and fall through the normalizer's malformed-input path at
/// render time.
pub fn parse_url_list(text: &str, origin: Option<&Url>) -> Vec<SitemapEntry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let Some(raw) = fields.next() else {
            continue;
        };
        let mut entry = SitemapEntry::new(resolve(raw, origin));
        if let Some(lastmod) = fields.next() {
            entry = entry.lastmod(lastmod);
        }
        entries.push(entry);
    }
    entries
}

fn resolve(raw: &str, origin: Option<&Url>) -> String {
    let origin_relative = raw.starts_with('/') && !raw.starts_with("//");
    match origin {
        Some(base) if origin_relative => match base.join(raw) {
            Ok(url) => url.into(),
            Err(_) => raw.to_string(),
        },
        _ => raw.to_string(),
    }
}
