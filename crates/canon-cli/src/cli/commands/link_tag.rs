//! `canon link-tag <url>` – print the canonical link element.

use anyhow::Result;
use canon_core::canonical::Normalizer;
use canon_core::markup::canonical_link_tag;

use crate::cli::diagnostics::StderrDiagnostics;

pub fn run_link_tag(normalizer: &Normalizer, url: &str) -> Result<()> {
    let tag = canonical_link_tag(url, normalizer, &StderrDiagnostics);
    println!("{tag}");
    Ok(())
}
