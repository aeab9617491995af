//! Configuration section definitions.

pub mod site;
pub mod sitemap;

pub use site::SiteSectionConfig;
pub use sitemap::{ChangeFreq, SitemapConfig};
