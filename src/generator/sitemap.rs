//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing the site URLs for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://jhpohovey.github.io/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>1.0</priority>
//!   </url></urlset>
//! ```
//!
//! Each `</url>` runs straight into the next entry or `</urlset>` with no
//! newline in between. Crawlers accept it and existing output stays
//! byte-identical.

use crate::{
    config::{ChangeFreq, SiteConfig},
    debug, log,
    utils::date::LastmodDate,
};
use anyhow::{Context, Result};
use quick_xml::escape::escape;
use std::{
    fs,
    io::{Write, stdout},
    path::Path,
};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build the sitemap and write it (or print it to stdout with `--dry`).
pub fn build_sitemap(config: &SiteConfig) -> Result<()> {
    build_sitemap_to(config, &mut stdout().lock())
}

/// Same as [`build_sitemap`], with `--dry` output going to `out`.
///
/// `out` only ever receives the document; diagnostics go to stderr.
fn build_sitemap_to(config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    let lastmod = config.date.unwrap_or_else(LastmodDate::today);
    debug!("sitemap"; "lastmod {}", lastmod);

    let sitemap = Sitemap::build(config, lastmod);
    let count = sitemap.urls.len();

    if config.dry {
        let xml = sitemap.render(config.sitemap.minify);
        out.write_all(&xml)?;
        out.flush()?;
        return Ok(());
    }

    let path = config.output_path();
    sitemap.write(&path, config.sitemap.minify)?;

    log!("sitemap"; "{} ({} url{})",
        path.file_name().unwrap_or_default().to_string_lossy(),
        count, if count == 1 { "" } else { "s" });
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: LastmodDate,
    changefreq: ChangeFreq,
    priority: f32,
}

impl Sitemap {
    fn build(config: &SiteConfig, lastmod: LastmodDate) -> Self {
        let urls = config
            .site
            .urls()
            .into_iter()
            .map(|loc| UrlEntry {
                loc,
                lastmod,
                changefreq: config.sitemap.changefreq,
                priority: config.sitemap.priority,
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 192);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape(entry.loc.as_str()));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod.to_string());
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format_priority(entry.priority));
            xml.push_str("</priority>\n  </url>");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Final bytes; `minify` drops indentation and line breaks.
    fn render(self, minify: bool) -> Vec<u8> {
        let xml = self.into_xml();
        if !minify {
            return xml.into_bytes();
        }

        xml.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<String>()
            .into_bytes()
    }

    /// Create or truncate `path`. The parent directory must already exist.
    fn write(self, path: &Path, minify: bool) -> Result<()> {
        let xml = self.render(minify);

        fs::write(path, &xml)
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))
    }
}

/// Shortest exact decimal, always with a fractional part (`1.0`, `0.25`).
fn format_priority(priority: f32) -> String {
    let mut out = priority.to_string();
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}
