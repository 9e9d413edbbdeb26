//! Sitemap (`urlset`) rendering with canonical `<loc>` entries.

mod entry;
mod url_list;

pub use entry::{ChangeFreq, SitemapEntry};
pub use url_list::parse_url_list;

use std::collections::HashSet;

use crate::canonical::Normalizer;
use crate::diagnostics::Diagnostics;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Renders a sitemap document for `entries`.
///
/// Every `loc` is canonicalized (malformed ones pass through and are reported).
/// Entries whose canonical `loc` was already emitted are dropped; the first
/// occurrence wins.
pub fn render_sitemap(
    entries: &[SitemapEntry],
    normalizer: &Normalizer,
    diagnostics: &dyn Diagnostics,
) -> String {
    let mut seen = HashSet::new();
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!("<urlset xmlns=\"{SITEMAP_NAMESPACE}\">\n"));

    for entry in entries {
        let loc = normalizer.normalize_or_passthrough(&entry.loc, diagnostics);
        if !seen.insert(loc.clone()) {
            diagnostics.duplicate_loc(&loc);
            continue;
        }
        out.push_str("  <url>\n");
        let loc_text = html_escape::encode_text(&loc);
        out.push_str(&format!("    <loc>{loc_text}</loc>\n"));
        if let Some(lastmod) = &entry.lastmod {
            let lastmod = html_escape::encode_text(lastmod);
            out.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
        }
        if let Some(freq) = entry.changefreq {
            out.push_str(&format!("    <changefreq>{}</changefreq>\n", freq.as_str()));
        }
        if let Some(priority) = entry.priority {
            out.push_str(&format!("    <priority>{priority}</priority>\n"));
        }
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    tracing::debug!(entries = seen.len(), "rendered sitemap");
    out
}
