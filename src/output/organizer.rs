//! Output organization
//!
//! Decides where rendered pages end up: accumulated into one document
//! (single mode) or written one file per page with an index (chapters and
//! pages modes).

use crate::config::{OutputMode, ScrapeConfig};
use crate::output::markdown::{render_document_header, render_index};
use crate::output::Page;
use crate::url::UrlScope;
use crate::ScrapeError;
use std::path::{Path, PathBuf};

/// Name of the index written next to per-page files
pub const INDEX_FILENAME: &str = "index.md";

/// Routes rendered pages to their output files
#[derive(Debug)]
pub struct OutputOrganizer {
    mode: OutputMode,
    output_path: PathBuf,
    output_dir: PathBuf,
    corpus_title: String,
    combined: String,
    written: Vec<PathBuf>,
}

impl OutputOrganizer {
    /// Creates an organizer for the configured mode and output path
    pub fn new(config: &ScrapeConfig, scope: &UrlScope) -> Self {
        Self {
            mode: config.organization,
            output_path: config.output_path.clone(),
            output_dir: config.output_dir(),
            corpus_title: scope.corpus_title().to_string(),
            combined: String::new(),
            written: Vec::new(),
        }
    }

    /// Accepts a freshly crawled page
    ///
    /// In single mode the page body is appended to the combined document.
    /// In multi-file modes the page is written immediately; a failed write
    /// is logged and the crawl goes on.
    pub fn add_page(&mut self, page: &Page) {
        if !self.mode.is_multi_file() {
            self.combined.push_str(&page.content);
            return;
        }

        let path = self.output_dir.join(&page.filename);
        match write_content_to_file(&path, &page.content) {
            Ok(()) => {
                tracing::info!("Wrote {}", path.display());
                self.written.push(path);
            }
            Err(e) => {
                tracing::warn!("Error writing file {}: {}", path.display(), e);
            }
        }
    }

    /// Writes the final artifact once the crawl has drained
    ///
    /// Single mode writes the corpus header followed by every page body.
    /// Multi-file modes write `index.md` listing `pages` in crawl order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PathBuf>)` - Every file written during the run
    /// * `Err(ScrapeError)` - The final document or index could not be written
    pub fn finish(mut self, pages: &[Page]) -> Result<Vec<PathBuf>, ScrapeError> {
        if self.mode.is_multi_file() {
            let index_path = self.output_dir.join(INDEX_FILENAME);
            write_content_to_file(&index_path, &render_index(&self.corpus_title, pages))?;
            tracing::info!("Wrote index {}", index_path.display());
            self.written.push(index_path);
        } else {
            let document = format!(
                "{}{}",
                render_document_header(&self.corpus_title),
                self.combined
            );
            write_content_to_file(&self.output_path, &document)?;
            tracing::info!("Wrote {}", self.output_path.display());
            self.written.push(self.output_path.clone());
        }

        Ok(self.written)
    }

    /// Writes the output of a single-page run
    ///
    /// Single mode writes the page body alone to the output path, without
    /// the corpus header. Multi-file modes write the page file and an index
    /// listing it.
    pub fn finish_single_page(mut self, page: &Page) -> Result<Vec<PathBuf>, ScrapeError> {
        if self.mode.is_multi_file() {
            self.add_page(page);
            return self.finish(std::slice::from_ref(page));
        }

        write_content_to_file(&self.output_path, &page.content)?;
        tracing::info!("Wrote {}", self.output_path.display());
        self.written.push(self.output_path.clone());

        Ok(self.written)
    }
}

/// Writes a file, creating its parent directories first
pub fn write_content_to_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    std::fs::write(path, content)
}
