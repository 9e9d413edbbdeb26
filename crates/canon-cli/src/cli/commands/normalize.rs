//! `canon normalize <url>...` – print canonical URLs.

use anyhow::Result;
use canon_core::canonical::Normalizer;

use crate::cli::diagnostics::StderrDiagnostics;

pub fn run_normalize(normalizer: &Normalizer, urls: &[String], strict: bool) -> Result<()> {
    for url in urls {
        let canonical = if strict {
            normalizer.normalize(url)?
        } else {
            normalizer.normalize_or_passthrough(url, &StderrDiagnostics)
        };
        println!("{canonical}");
    }
    Ok(())
}
