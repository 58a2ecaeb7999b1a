//! Output file naming
//!
//! Page titles (or, failing that, the last URL segment) are turned into
//! lower-case, filesystem-safe names. Names are unique within a crawl:
//! a page whose name is already taken gets a short hash of its URL appended.

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Extension of every generated file
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Characters replaced with `_`, in addition to all whitespace
pub const RESERVED_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>', '.', ' '];

/// Maximum length of a sanitized name, in characters
pub const MAX_FILENAME_CHARS: usize = 100;

/// Name used when nothing usable remains
pub const PLACEHOLDER_NAME: &str = "unnamed";

/// Turns an arbitrary string into a safe file stem
///
/// The result is lower-case, contains no reserved character or whitespace,
/// is never empty, and is at most [`MAX_FILENAME_CHARS`] characters long.
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use docscrap::output::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Getting Started: v2.0"), "getting_started__v2_0");
/// assert_eq!(sanitize_filename(""), "unnamed");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .to_lowercase()
        .chars()
        .map(|c| {
            if RESERVED_CHARS.contains(&c) || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect();

    if replaced.is_empty() {
        return PLACEHOLDER_NAME.to_string();
    }

    replaced.chars().take(MAX_FILENAME_CHARS).collect()
}

/// Derives the file name of a page from its title, or its URL when untitled
pub fn page_filename(title: &str, url: &str) -> String {
    let source = if title.is_empty() {
        last_path_segment(url)
    } else {
        title
    };

    format!("{}{}", sanitize_filename(source), MARKDOWN_EXTENSION)
}

/// Returns the last non-empty `/`-separated segment of a URL
fn last_path_segment(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Hands out file names that are unique within one crawl
#[derive(Debug, Default)]
pub struct FilenameRegistry {
    used: HashSet<String>,
}

impl FilenameRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a file name for a page
    ///
    /// The first page to claim a name keeps it. Later pages with the same
    /// name get `_<first 8 hex digits of SHA-256(url)>` before the extension.
    pub fn claim(&mut self, title: &str, url: &str) -> String {
        let filename = page_filename(title, url);
        if self.used.insert(filename.clone()) {
            return filename;
        }

        let stem = filename
            .strip_suffix(MARKDOWN_EXTENSION)
            .unwrap_or(&filename);
        let digest = hex::encode(Sha256::digest(url.as_bytes()));
        let unique = format!("{}_{}{}", stem, &digest[..8], MARKDOWN_EXTENSION);

        tracing::debug!(
            "File name {} already taken, using {} for {}",
            filename,
            unique,
            url
        );
        self.used.insert(unique.clone());
        unique
    }
}
