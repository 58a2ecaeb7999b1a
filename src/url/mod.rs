//! URL handling module for docscrap
//!
//! This module anchors every URL decision to the seed URL of a crawl:
//! turning hrefs into absolute URLs, deciding which URLs are in scope,
//! and computing a page's depth level relative to the seed.

mod domain;
mod resolve;
mod scope;

use crate::ScrapeError;
use url::Url;

pub use domain::{extract_domain_prefix, page_level, strip_scheme};
pub use scope::IGNORED_PATH_INFIXES;

/// The seed URL of a crawl and everything derived from it
///
/// All resolution and scope decisions are made against this value, so it is
/// built once per run and shared by the crawl engine and the extractor.
#[derive(Debug, Clone)]
pub struct UrlScope {
    /// Seed URL as given by the user (surrounding whitespace removed)
    base_url: String,

    /// Parsed form of the seed URL
    base: Url,

    /// `scheme://host[:port]` of the seed URL
    domain_prefix: String,
}

impl UrlScope {
    /// Creates a scope anchored at the given seed URL
    ///
    /// # Arguments
    ///
    /// * `base_url` - The seed URL of the crawl
    ///
    /// # Returns
    ///
    /// * `Ok(UrlScope)` - The seed parsed as an absolute URL
    /// * `Err(ScrapeError)` - The seed is not a valid absolute URL
    ///
    /// # Example
    ///
    /// ```
    /// use docscrap::url::UrlScope;
    ///
    /// let scope = UrlScope::new("https://docs.example.com/guide").unwrap();
    /// assert_eq!(scope.domain_prefix(), "https://docs.example.com");
    /// ```
    pub fn new(base_url: &str) -> Result<Self, ScrapeError> {
        let base_url = base_url.trim().to_string();
        let base = Url::parse(&base_url)?;
        let domain_prefix = extract_domain_prefix(&base);

        Ok(Self {
            base_url,
            base,
            domain_prefix,
        })
    }

    /// Returns the seed URL as given
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the scheme of the seed URL
    pub fn scheme(&self) -> &str {
        self.base.scheme()
    }

    /// Returns `scheme://host[:port]` of the seed URL
    pub fn domain_prefix(&self) -> &str {
        &self.domain_prefix
    }

    /// Returns the corpus title: the seed URL without its scheme
    pub fn corpus_title(&self) -> &str {
        strip_scheme(&self.base_url)
    }

    /// Returns the depth level of `url` relative to the seed
    pub fn level_of(&self, url: &str) -> usize {
        page_level(&self.base_url, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let scope = UrlScope::new("  https://example.com/docs  ").unwrap();
        assert_eq!(scope.base_url(), "https://example.com/docs");
    }

    #[test]
    fn test_new_rejects_relative_url() {
        assert!(UrlScope::new("/docs").is_err());
        assert!(UrlScope::new("").is_err());
    }

    #[test]
    fn test_scheme_and_prefix() {
        let scope = UrlScope::new("http://localhost:8080/docs").unwrap();
        assert_eq!(scope.scheme(), "http");
        assert_eq!(scope.domain_prefix(), "http://localhost:8080");
    }

    #[test]
    fn test_corpus_title() {
        let scope = UrlScope::new("https://react.dev/reference/react").unwrap();
        assert_eq!(scope.corpus_title(), "react.dev/reference/react");
    }

    #[test]
    fn test_level_of() {
        let scope = UrlScope::new("https://example.com/docs").unwrap();
        assert_eq!(scope.level_of("https://example.com/docs"), 1);
        assert_eq!(scope.level_of("https://example.com/docs/a/b"), 2);
    }
}
