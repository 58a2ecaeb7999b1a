//! Content extraction module
//!
//! This module turns a parsed documentation page into its substantive
//! content:
//! - Boilerplate regions (navigation, headers, sidebars, ads...) are removed
//! - The main content region is the first non-empty match of a prioritized
//!   selector list
//! - The title is taken from the first `h1` of that region
//! - Headings, paragraphs, code, lists and quotes are collected as [`Block`]s

mod blocks;
mod document;

pub use blocks::{classify, detect_language, Block, BLOCK_SELECTOR, LANGUAGE_CLASS_PREFIXES};
pub use document::{attr, select_within, text, HtmlDocument};

use crate::url::UrlScope;
use crate::ScrapeError;

/// Regions removed before extraction
pub const BOILERPLATE_SELECTORS: &[&str] = &[
    "header",
    "footer",
    "nav",
    ".header",
    ".footer",
    ".navigation",
    ".nav",
    ".navbar",
    ".sidebar",
    ".side-bar",
    ".menu",
    ".toc",
    ".ad",
    ".ads",
    ".advertisement",
    ".cookie-banner",
    ".cookies",
    ".search",
    ".searchbox",
    "[role=\"banner\"]",
    "[role=\"navigation\"]",
    ".social-links",
    ".share-buttons",
];

/// Main content candidates, highest priority first
pub const MAIN_CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    ".main-content",
    ".content",
    ".article",
    ".post",
    ".documentation",
    ".doc-content",
    "#content",
    "#main",
];

/// Content extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedContent {
    /// Trimmed text of the first `h1` in the main region, or empty
    pub title: String,

    /// Depth of the page relative to the seed URL (at least 1)
    pub level: usize,

    /// Content blocks in document order
    pub blocks: Vec<Block>,
}

/// Extracts the substantive content of a page
///
/// Boilerplate is removed from `document` in place, so link discovery must
/// run before this function when it needs navigation links.
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `page_url` - The absolute URL the page was fetched from
/// * `scope` - The crawl scope, used to compute the depth level
///
/// # Returns
///
/// * `Ok(ExtractedContent)` - Title, level and blocks
/// * `Err(ScrapeError::Extraction)` - A selector could not be applied
pub fn extract_content(
    document: &mut HtmlDocument,
    page_url: &str,
    scope: &UrlScope,
) -> Result<ExtractedContent, ScrapeError> {
    let fail = |message: String| ScrapeError::Extraction {
        url: page_url.to_string(),
        message,
    };

    let mut removed = 0;
    for selector in BOILERPLATE_SELECTORS {
        removed += document.remove(selector).map_err(fail)?;
    }
    tracing::trace!("Removed {} boilerplate elements from {}", removed, page_url);

    let mut main = None;
    for selector in MAIN_CONTENT_SELECTORS {
        let candidates = document.select(selector).map_err(fail)?;
        if let Some(element) = candidates.into_iter().find(|el| !text(el).trim().is_empty()) {
            tracing::trace!("Main content of {} matched '{}'", page_url, selector);
            main = Some(element);
            break;
        }
    }
    let main = main.unwrap_or_else(|| document.body());

    let title = select_within(&main, "h1")
        .map_err(fail)?
        .first()
        .map(|h1| text(h1).trim().to_string())
        .unwrap_or_default();

    let blocks = select_within(&main, BLOCK_SELECTOR)
        .map_err(fail)?
        .iter()
        .filter_map(classify)
        .collect();

    Ok(ExtractedContent {
        title,
        level: scope.level_of(page_url),
        blocks,
    })
}
