//! Link discovery
//!
//! Collects the outbound links of a fetched page that the crawl should
//! follow. Links are read from the full document, before boilerplate
//! removal, so navigation menus contribute their links.

use crate::extract::{attr, HtmlDocument};
use crate::url::UrlScope;
use crate::ScrapeError;
use std::collections::HashSet;
use url::Url;

/// Extracts in-scope links from a parsed page
///
/// # Link Extraction Rules
///
/// **Skip:**
/// - empty and fragment-only hrefs (`#section`)
/// - `javascript:`, `mailto:`, `tel:` and `data:` hrefs
/// - `<a href="..." download>`
///
/// Every other href is resolved against the seed with
/// [`UrlScope::resolve`] and kept when [`UrlScope::in_scope`] accepts it.
/// Duplicates are dropped, preserving first-seen order.
///
/// # Arguments
///
/// * `document` - The parsed page, before boilerplate removal
/// * `page_url` - The URL the page was fetched from
/// * `scope` - The crawl scope
/// * `visited` - URLs already processed in this crawl
///
/// # Returns
///
/// * `Ok(Vec<String>)` - In-scope absolute URLs
/// * `Err(ScrapeError::LinkDiscovery)` - The page URL or link selector is unusable
pub fn discover_links(
    document: &HtmlDocument,
    page_url: &str,
    scope: &UrlScope,
    visited: &HashSet<String>,
) -> Result<Vec<String>, ScrapeError> {
    let fail = |message: String| ScrapeError::LinkDiscovery {
        url: page_url.to_string(),
        message,
    };

    Url::parse(page_url).map_err(|e| fail(e.to_string()))?;
    let anchors = document.select("a[href]").map_err(fail)?;

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for anchor in anchors {
        if attr(&anchor, "download").is_some() {
            continue;
        }

        let Some(href) = attr(&anchor, "href") else {
            continue;
        };
        if should_skip_href(href) {
            continue;
        }

        let Some(absolute) = scope.resolve(href) else {
            continue;
        };

        if !scope.in_scope(&absolute, visited) {
            tracing::debug!("Skipping out-of-scope link {}", absolute);
            continue;
        }

        if seen.insert(absolute.clone()) {
            links.push(absolute);
        }
    }

    Ok(links)
}

/// Returns true for hrefs that never lead to another document page
fn should_skip_href(href: &str) -> bool {
    let href = href.trim();
    let lower = href.to_ascii_lowercase();

    href.is_empty()
        || href.starts_with('#')
        || ["javascript:", "mailto:", "tel:", "data:"]
            .iter()
            .any(|scheme| lower.starts_with(scheme))
}
