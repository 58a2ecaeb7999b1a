//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - Link discovery and the breadth-first frontier
//! - Politeness delays between requests
//! - Overall crawl coordination

mod coordinator;
mod delay;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{Coordinator, CrawlReport};
pub use delay::PolitenessDelay;
pub use fetcher::{build_http_client, fetch_page};
pub use frontier::Frontier;
pub use parser::discover_links;

use crate::config::ScrapeConfig;
use crate::ScrapeError;
use rand::rngs::StdRng;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP client
/// 3. Fetch pages breadth-first from the seed, or only the seed
/// 4. Extract content and follow in-scope links
/// 5. Write the Markdown output
///
/// # Arguments
///
/// * `config` - The run configuration
/// * `rng` - Random source for politeness delays
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed and output written
/// * `Err(ScrapeError)` - Crawl failed
pub async fn crawl(config: ScrapeConfig, rng: StdRng) -> Result<CrawlReport, ScrapeError> {
    let mut coordinator = Coordinator::new(config, rng)?;
    coordinator.run().await
}
