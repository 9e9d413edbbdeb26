//! `canon check <url>` – explain the canonical form of a URL.

use anyhow::Result;
use canon_core::canonical::Normalizer;

pub fn run_check(normalizer: &Normalizer, url: &str) -> Result<()> {
    let report = normalizer.check(url)?;
    if report.is_canonical() {
        println!("canonical: {}", report.canonical);
        return Ok(());
    }
    println!("not canonical: {}", report.input);
    println!("  canonical form: {}", report.canonical);
    for change in report.changes() {
        println!("  - {change}");
    }
    Ok(())
}
