//! `canon redirects` – print permanent redirects for the legacy path table.

use anyhow::{Context, Result};
use canon_core::canonical::Normalizer;
use canon_core::legacy::redirects_json;

pub fn run_redirects(normalizer: &Normalizer) -> Result<()> {
    let json = redirects_json(normalizer.legacy_paths()).context("serialize redirect rules")?;
    println!("{json}");
    Ok(())
}
