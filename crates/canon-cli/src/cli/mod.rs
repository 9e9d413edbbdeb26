//! CLI for canonical URL, redirect and sitemap tooling.

mod commands;
mod diagnostics;

use anyhow::{Context, Result};
use canon_core::canonical::Normalizer;
use canon_core::config::{self, CanonConfig};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

use commands::{run_check, run_completions, run_link_tag, run_normalize, run_redirects, run_sitemap};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "canon")]
#[command(about = "canon: canonical URLs, legacy redirects and sitemaps", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/canon/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of each URL.
    Normalize {
        /// Absolute URLs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,
        /// Fail on malformed input instead of echoing it back unchanged.
        #[arg(long)]
        strict: bool,
    },

    /// Explain whether a URL is canonical and what normalization changes.
    Check {
        /// Absolute URL to inspect.
        url: String,
    },

    /// Print the legacy redirect table as JSON.
    Redirects,

    /// Render a sitemap from a URL list (one URL per line, optional lastmod).
    Sitemap {
        /// URL list file; reads stdin when omitted.
        path: Option<PathBuf>,
    },

    /// Print the `<link rel="canonical">` element for a URL.
    LinkTag {
        /// Absolute URL of the page.
        url: String,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn load_config(path: Option<&Path>) -> Result<CanonConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let Cli { config, command } = Cli::parse();

        // Completions don't need (or create) a config file.
        if let CliCommand::Completions { shell } = command {
            return run_completions(shell);
        }

        let cfg = load_config(config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);
        let normalizer = Normalizer::from_config(&cfg).context("invalid legacy_paths in config")?;

        command.dispatch(&cfg, &normalizer)
    }

    fn dispatch(self, cfg: &CanonConfig, normalizer: &Normalizer) -> Result<()> {
        match self {
            CliCommand::Normalize { urls, strict } => run_normalize(normalizer, &urls, strict)?,
            CliCommand::Check { url } => run_check(normalizer, &url)?,
            CliCommand::Redirects => run_redirects(normalizer)?,
            CliCommand::Sitemap { path } => run_sitemap(normalizer, cfg, path.as_deref())?,
            CliCommand::LinkTag { url } => run_link_tag(normalizer, &url)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
