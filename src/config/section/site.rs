//! `[site]` section configuration.

use serde::Deserialize;

/// Base URL listed when no config overrides it.
pub const DEFAULT_BASE_URL: &str = "https://jhpohovey.github.io/";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site base URL, always the first sitemap entry.
    pub url: String,
    /// Extra pages, joined onto `url` in listed order.
    pub pages: Vec<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
            pages: Vec::new(),
        }
    }
}

impl SiteSectionConfig {
    /// All URLs to list: the base URL verbatim, then each page.
    ///
    /// No deduplication and no well-formedness checks.
    pub fn urls(&self) -> Vec<String> {
        let base = self.url.trim_end_matches('/');

        std::iter::once(self.url.clone())
            .chain(
                self.pages
                    .iter()
                    .map(|page| format!("{}/{}", base, page.trim_start_matches('/'))),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.url, DEFAULT_BASE_URL);
        assert!(config.site.pages.is_empty());
        assert_eq!(config.site.urls(), vec![DEFAULT_BASE_URL.to_string()]);
    }

    #[test]
    fn test_base_url_kept_verbatim() {
        let config = test_parse_config("[site]\nurl = \"https://example.com\"");
        assert_eq!(config.site.urls(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_pages_joined_in_order() {
        let config = test_parse_config(
            "[site]\nurl = \"https://example.com/\"\npages = [\"/about/\", \"posts/hello/\", \"/about/\"]",
        );
        assert_eq!(
            config.site.urls(),
            vec![
                "https://example.com/".to_string(),
                "https://example.com/about/".to_string(),
                "https://example.com/posts/hello/".to_string(),
                "https://example.com/about/".to_string(),
            ]
        );
    }
}
