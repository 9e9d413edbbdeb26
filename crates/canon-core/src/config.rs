use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::legacy::LegacyPathRule;
use crate::sitemap::ChangeFreq;

/// Defaults applied to sitemap entries that don't set their own values
/// (optional `[sitemap]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitemapConfig {
    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,
    /// Priority in `[0.0, 1.0]`; out-of-range values are clamped.
    #[serde(default)]
    pub priority: Option<f32>,
}

/// Global configuration loaded from `~/.config/canon/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonConfig {
    /// Site origin (e.g. `https://www.example.com`) used to resolve relative
    /// paths in sitemap URL lists.
    #[serde(default)]
    pub site_origin: Option<String>,
    /// Legacy path table, applied first-match-wins in this order. Also the
    /// source of the permanent redirect rules.
    #[serde(default)]
    pub legacy_paths: Vec<LegacyPathRule>,
    #[serde(default)]
    pub sitemap: Option<SitemapConfig>,
}

/// The two legacy paths the site has published under dotted names.
pub fn default_legacy_paths() -> Vec<LegacyPathRule> {
    vec![
        LegacyPathRule::new("/services/ai.agents", "/services/ai-agents"),
        LegacyPathRule::new("/products/voice.ai", "/products/voice-ai"),
    ]
}

impl Default for CanonConfig {
    fn default() -> Self {
        Self {
            site_origin: None,
            legacy_paths: default_legacy_paths(),
            sitemap: None,
        }
    }
}

impl CanonConfig {
    /// Parsed `site_origin`, if set.
    pub fn site_origin_url(&self) -> Result<Option<Url>> {
        let Some(origin) = self.site_origin.as_deref() else {
            return Ok(None);
        };
        let url = Url::parse(origin)
            .with_context(|| format!("invalid site_origin in config: {origin}"))?;
        Ok(Some(url))
    }

    pub fn sitemap_defaults(&self) -> SitemapConfig {
        self.sitemap.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("canon")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CanonConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CanonConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<CanonConfig> {
    let shown = path.display();
    let data = fs::read_to_string(path).with_context(|| format!("read config: {shown}"))?;
    let cfg: CanonConfig = toml::from_str(&data).with_context(|| format!("parse config: {shown}"))?;
    Ok(cfg)
}
