//! Crawled page records

use crate::extract::ExtractedContent;
use crate::output::markdown::render_page;

/// One crawled unit of output
///
/// Created once per successfully fetched and extracted URL and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Text of the page's first `h1`, or empty
    pub title: String,

    /// Rendered Markdown body, including the source citation
    pub content: String,

    /// Absolute URL the page was fetched from
    pub url: String,

    /// Sanitized file name, unique within the crawl, ending in `.md`
    pub filename: String,

    /// Depth relative to the seed URL, used for index indentation
    pub level: usize,
}

impl Page {
    /// Renders extracted content into a page
    pub fn from_content(url: &str, content: ExtractedContent, filename: String) -> Self {
        let markdown = render_page(url, &content.title, &content.blocks);

        Self {
            title: content.title,
            content: markdown,
            url: url.to_string(),
            filename,
            level: content.level,
        }
    }
}
