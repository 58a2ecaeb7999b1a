//! Output module for rendering and writing the Markdown corpus
//!
//! This module handles:
//! - Rendering extracted blocks into Markdown page bodies
//! - Naming output files safely and uniquely
//! - Writing one combined document, or per-page files plus an index

mod filename;
mod markdown;
mod organizer;
mod page;

pub use filename::{
    page_filename, sanitize_filename, FilenameRegistry, MARKDOWN_EXTENSION, MAX_FILENAME_CHARS,
    RESERVED_CHARS,
};
pub use markdown::{render_block, render_document_header, render_index, render_page};
pub use organizer::{write_content_to_file, OutputOrganizer, INDEX_FILENAME};
pub use page::Page;
