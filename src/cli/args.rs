//! Command-line interface definitions.

use crate::utils::date::LastmodDate;
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate a static sitemap.xml.
///
/// With no arguments, writes `sitemap.xml` to the current directory using
/// `sitemap.toml` if present and built-in defaults otherwise.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemap.toml)
    #[arg(short = 'C', long, default_value = "sitemap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Output file path (relative to current directory)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Override the site base URL
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Pin the lastmod date (YYYY-MM-DD) instead of using today
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<LastmodDate>,

    /// Collapse the sitemap onto a single line
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Print the sitemap to stdout instead of writing the file
    #[arg(long)]
    pub dry: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_date(s: &str) -> Result<LastmodDate, String> {
    LastmodDate::parse(s).ok_or_else(|| format!("expected a valid YYYY-MM-DD date, got `{s}`"))
}
