//! Semantic content blocks
//!
//! Each element found by the block walk is classified into exactly one
//! [`Block`] variant carrying the text needed to render it. Extraction and
//! rendering stay separate: this module never produces Markdown.

use crate::extract::document::{attr, select_within, text};
use scraper::ElementRef;

/// Elements visited by the block walk, in document order
pub const BLOCK_SELECTOR: &str = "h2, h3, h4, h5, h6, p, pre, ul, ol, blockquote";

/// Class prefixes that announce the language of a code block
pub const LANGUAGE_CLASS_PREFIXES: &[&str] = &["language-", "lang-", "brush:"];

/// One semantic unit of extracted content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `h2`..`h6`; `level` is the digit of the tag name
    Heading { level: u8, text: String },

    /// Trimmed paragraph text
    Paragraph(String),

    /// Preformatted code with an optional language tag
    Code {
        language: Option<String>,
        code: String,
    },

    /// Flattened list items, nesting discarded
    List(Vec<String>),

    /// Trimmed quote lines
    Quote(Vec<String>),
}

/// Classifies an element into a block
///
/// Returns `None` for elements that render to nothing: empty headings,
/// empty paragraphs, `pre` without an embedded `code`, empty code and
/// empty quotes. Lists are always returned, even when every item is empty.
pub fn classify(element: &ElementRef<'_>) -> Option<Block> {
    let name = element.value().name();

    match name {
        "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = name[1..].parse::<u8>().ok()?;
            non_empty(text(element)).map(|text| Block::Heading { level, text })
        }
        "p" => non_empty(text(element)).map(Block::Paragraph),
        "pre" => classify_code(element),
        "ul" | "ol" => {
            let items = select_within(element, "li")
                .unwrap_or_default()
                .iter()
                .filter_map(|li| non_empty(text(li)))
                .collect();
            Some(Block::List(items))
        }
        "blockquote" => {
            let quote = non_empty(text(element))?;
            let lines = quote.split('\n').map(|line| line.trim().to_string()).collect();
            Some(Block::Quote(lines))
        }
        _ => None,
    }
}

fn classify_code(pre: &ElementRef<'_>) -> Option<Block> {
    let code_element = select_within(pre, "code").ok()?.into_iter().next()?;
    let language = attr(&code_element, "class").and_then(detect_language);
    let code = non_empty(text(&code_element))?;

    Some(Block::Code { language, code })
}

/// Detects a code language from a class attribute
///
/// The first prefix of [`LANGUAGE_CLASS_PREFIXES`] found in `class` wins;
/// the language is what follows it, up to the next whitespace (or `;`,
/// for `brush: js;` style classes).
///
/// # Examples
///
/// ```
/// use docscrap::extract::detect_language;
///
/// assert_eq!(detect_language("language-python foo").as_deref(), Some("python"));
/// assert_eq!(detect_language("brush: js;").as_deref(), Some("js"));
/// assert_eq!(detect_language("highlight"), None);
/// ```
pub fn detect_language(class: &str) -> Option<String> {
    let prefix = LANGUAGE_CLASS_PREFIXES
        .iter()
        .find(|prefix| class.contains(*prefix))?;
    let (_, rest) = class.split_once(*prefix)?;

    let language: String = rest
        .trim_start()
        .chars()
        .take_while(|c| !c.is_whitespace() && *c != ';')
        .collect();

    if language.is_empty() {
        None
    } else {
        Some(language)
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
