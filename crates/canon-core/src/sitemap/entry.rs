//! Sitemap entry model.

use serde::{Deserialize, Serialize};

use crate::config::SitemapConfig;

/// `<changefreq>` values from the sitemaps.org protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    /// W3C datetime string, emitted as-is.
    pub fn lastmod(mut self, lastmod: impl Into<String>) -> Self {
        self.lastmod = Some(lastmod.into());
        self
    }

    pub fn changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    /// Clamped into `[0.0, 1.0]`; NaN clears the priority.
    pub fn priority(mut self, priority: f32) -> Self {
        self.priority = clamp_priority(priority);
        self
    }

    /// Fills unset `changefreq`/`priority` from config defaults.
    pub fn with_defaults(mut self, defaults: &SitemapConfig) -> Self {
        if self.changefreq.is_none() {
            self.changefreq = defaults.changefreq;
        }
        if self.priority.is_none() {
            self.priority = defaults.priority.and_then(clamp_priority);
        }
        self
    }
}

fn clamp_priority(p: f32) -> Option<f32> {
    if p.is_nan() {
        None
    } else {
        Some(p.clamp(0.0, 1.0))
    }
}
