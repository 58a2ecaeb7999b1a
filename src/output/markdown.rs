//! Markdown rendering
//!
//! This module serializes extracted [`Block`]s into Markdown and frames
//! them into page bodies, combined documents and the index.

use crate::extract::Block;
use crate::output::Page;

/// Renders a page body
///
/// The framing is the same whether the page becomes its own file or a
/// fragment of the combined document:
///
/// ```text
///
/// ## Source: <url>
///
/// # <title>          (only when a title was found)
///
/// <blocks>
/// ---
/// ```
///
/// # Example
///
/// ```
/// use docscrap::extract::Block;
/// use docscrap::output::render_page;
///
/// let md = render_page("https://example.com", "", &[Block::Paragraph("Hi".into())]);
/// assert_eq!(md, "\n## Source: https://example.com\n\nHi\n\n---\n\n");
/// ```
pub fn render_page(url: &str, title: &str, blocks: &[Block]) -> String {
    let mut md = String::new();

    md.push_str(&format!("\n## Source: {}\n\n", url));
    if !title.is_empty() {
        md.push_str(&format!("# {}\n\n", title));
    }
    for block in blocks {
        render_block(block, &mut md);
    }
    md.push_str("---\n\n");

    md
}

/// Appends the Markdown form of one block to `md`
pub fn render_block(block: &Block, md: &mut String) {
    match block {
        Block::Heading { level, text } => {
            md.push_str(&format!("{} {}\n\n", "#".repeat(*level as usize), text));
        }
        Block::Paragraph(text) => {
            md.push_str(text);
            md.push_str("\n\n");
        }
        Block::Code { language, code } => {
            md.push_str(&format!(
                "```{}\n{}\n```\n\n",
                language.as_deref().unwrap_or(""),
                code
            ));
        }
        Block::List(items) => {
            for item in items {
                md.push_str(&format!("- {}\n", item));
            }
            md.push('\n');
        }
        Block::Quote(lines) => {
            for line in lines {
                md.push_str(&format!("> {}\n", line));
            }
            md.push('\n');
        }
    }
}

/// Renders the corpus-level title line
pub fn render_document_header(corpus_title: &str) -> String {
    format!("# Documentation: {}\n\n", corpus_title)
}

/// Renders the index of a multi-file corpus
///
/// Pages are listed in crawl order, each indented by `level - 1` two-space
/// units.
pub fn render_index(corpus_title: &str, pages: &[Page]) -> String {
    let mut md = render_document_header(corpus_title);
    md.push_str("## Table of Contents\n\n");

    for page in pages {
        let indent = "  ".repeat(page.level.saturating_sub(1));
        md.push_str(&format!(
            "{}- [{}]({}) - [source]({})\n",
            indent, page.title, page.filename, page.url
        ));
    }

    md
}
