//! `canon sitemap [path]` – render sitemap XML from a URL list.

use anyhow::{Context, Result};
use canon_core::canonical::Normalizer;
use canon_core::config::CanonConfig;
use canon_core::sitemap::{parse_url_list, render_sitemap};
use std::io::Read;
use std::path::Path;

use crate::cli::diagnostics::StderrDiagnostics;

pub fn run_sitemap(normalizer: &Normalizer, cfg: &CanonConfig, path: Option<&Path>) -> Result<()> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("read URL list: {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read URL list from stdin")?;
            buf
        }
    };

    let origin = cfg.site_origin_url()?;
    let defaults = cfg.sitemap_defaults();
    let entries: Vec<_> = parse_url_list(&text, origin.as_ref())
        .into_iter()
        .map(|e| e.with_defaults(&defaults))
        .collect();
    tracing::info!(entries = entries.len(), "rendering sitemap");

    let xml = render_sitemap(&entries, normalizer, &StderrDiagnostics);
    print!("{xml}");
    Ok(())
}
