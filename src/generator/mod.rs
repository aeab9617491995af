//! Content generators for static site output.
//!
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)

pub mod sitemap;
