//! Generator configuration management for `sitemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── sitemap    # [sitemap]
//! ├── error          # ConfigError
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[site]`    | Base URL and extra pages to list                |
//! | `[sitemap]` | Output path, changefreq, priority, minification |
//!
//! The config file is optional. Without one every value falls back to its
//! default, so a bare invocation writes the single-URL sitemap.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::ChangeFreq;

use section::{SiteSectionConfig, SitemapConfig};

use crate::{cli::Cli, debug, log, utils::date::LastmodDate};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "sitemap.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Working directory the output path resolves against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Pinned `lastmod` date from `--date` (internal use only)
    #[serde(skip)]
    pub date: Option<LastmodDate>,

    /// Print instead of writing (internal use only)
    #[serde(skip)]
    pub dry: bool,

    /// Site settings (base url, pages)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Sitemap output settings
    #[serde(default)]
    pub sitemap: SitemapConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            date: None,
            dry: false,
            site: SiteSectionConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// A missing default config file is not an error; a missing file passed
    /// explicitly with `--config` is.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_in(cli, &cwd)
    }

    /// Load configuration relative to `cwd` instead of the process working directory.
    fn load_in(cli: &Cli, cwd: &Path) -> Result<Self> {
        let config_path = cwd.join(&cli.config);

        let mut config = if config_path.exists() {
            debug!("config"; "loading {}", config_path.display());
            Self::from_path(&config_path)?
        } else if cli.config.as_path() == Path::new(DEFAULT_CONFIG_NAME) {
            debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME);
            Self::default()
        } else {
            let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found");
            return Err(ConfigError::Io(config_path, err).into());
        };

        config.root = cwd.to_path_buf();
        config.apply_cli_args(cli);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}: {}", display_path, fields.join(", "));
    }

    /// Apply CLI overrides on top of file values.
    fn apply_cli_args(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        if let Some(ref url) = cli.site_url {
            self.site.url = url.clone();
        }
        if let Some(ref output) = cli.output {
            self.sitemap.path = output.clone();
        }
        Self::update_option(&mut self.sitemap.minify, cli.minify.as_ref());

        self.date = cli.date;
        self.dry = cli.dry;
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Check values serde cannot constrain on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.url.trim().is_empty() {
            return Err(ConfigError::Validation("site.url must not be empty".into()));
        }
        if self.sitemap.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "sitemap.path must not be empty".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.sitemap.priority) {
            return Err(ConfigError::Validation(format!(
                "sitemap.priority must be between 0.0 and 1.0, got {}",
                self.sitemap.priority
            )));
        }
        Ok(())
    }

    /// Absolute output path of the sitemap file.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.sitemap.path)
    }
}

/// Parse a config snippet for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
