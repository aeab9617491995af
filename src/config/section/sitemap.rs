//! `[sitemap]` section configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Change frequency hint for sitemap entries.
///
/// See <https://www.sitemaps.org/protocol.html#changefreqdef>.
/// Most crawlers ignore it nowadays.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    #[default]
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path, relative to the working directory.
    pub path: PathBuf,
    /// Change frequency applied to every entry.
    pub changefreq: ChangeFreq,
    /// Priority applied to every entry (0.0 to 1.0).
    pub priority: f32,
    /// Collapse the document onto a single line.
    pub minify: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".into(),
            changefreq: ChangeFreq::Monthly,
            priority: 1.0,
            minify: false,
        }
    }
}
