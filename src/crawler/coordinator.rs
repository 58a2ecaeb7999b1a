//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Managing the frontier queue and visited set
//! - Coordinating fetching, extraction and link discovery
//! - Pausing politely between fetches
//! - Handing pages to the output organizer and writing final output

use crate::config::{validate, ScrapeConfig};
use crate::crawler::delay::PolitenessDelay;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::discover_links;
use crate::extract::{extract_content, HtmlDocument};
use crate::output::{FilenameRegistry, OutputOrganizer, Page};
use crate::state::CrawlPhase;
use crate::url::UrlScope;
use crate::ScrapeError;
use rand::rngs::StdRng;
use reqwest::Client;
use std::path::PathBuf;

/// Outcome of a completed crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// Pages produced, in crawl order
    pub pages: Vec<Page>,

    /// URLs whose fetch or extraction failed
    pub failed: Vec<String>,

    /// Files written during the run
    pub written_files: Vec<PathBuf>,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: ScrapeConfig,
    scope: UrlScope,
    client: Client,
    frontier: Frontier,
    delay: PolitenessDelay,
    filenames: FilenameRegistry,
    pages: Vec<Page>,
    failed: Vec<String>,
    phase: CrawlPhase,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The run configuration, validated here
    /// * `rng` - Random source for the politeness delay
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run, in the `Idle` phase
    /// * `Err(ScrapeError)` - Invalid configuration or HTTP client failure
    pub fn new(config: ScrapeConfig, rng: StdRng) -> Result<Self, ScrapeError> {
        validate(&config)?;

        let scope = UrlScope::new(&config.base_url)?;
        let client = build_http_client(&config.user_agent, config.timeout).map_err(|source| {
            ScrapeError::Http {
                url: scope.base_url().to_string(),
                source,
            }
        })?;
        let frontier = Frontier::with_seed(scope.base_url());
        let delay = PolitenessDelay::new(config.min_delay, config.max_delay, !config.no_delay, rng);

        Ok(Self {
            config,
            scope,
            client,
            frontier,
            delay,
            filenames: FilenameRegistry::new(),
            pages: Vec::new(),
            failed: Vec::new(),
            phase: CrawlPhase::Idle,
        })
    }

    /// Returns the current phase of the run
    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// Returns the crawl scope
    pub fn scope(&self) -> &UrlScope {
        &self.scope
    }

    /// Runs the crawl to completion and writes the output
    ///
    /// In single-page mode only the seed is fetched and no frontier is
    /// used. Otherwise the frontier is drained breadth-first: each page is
    /// fetched, its links discovered, its content extracted and handed to
    /// the output organizer, followed by a politeness pause.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - Pages produced, failures and files written
    /// * `Err(ScrapeError)` - Final output could not be written, or the
    ///   seed could not be scraped in single-page mode
    pub async fn run(&mut self) -> Result<CrawlReport, ScrapeError> {
        self.phase = self.phase.transition(CrawlPhase::Running)?;
        tracing::info!(
            "Starting crawl of {} (organization: {})",
            self.scope.base_url(),
            self.config.organization
        );
        if self.delay.is_enabled() {
            tracing::info!(
                "Politeness delay between {} and {} seconds",
                self.config.min_delay,
                self.config.max_delay
            );
        } else {
            tracing::info!("Politeness delay disabled");
        }

        let organizer = OutputOrganizer::new(&self.config, &self.scope);
        let written_files = if self.config.single_page {
            self.run_single_page(organizer).await?
        } else {
            self.run_frontier(organizer).await?
        };

        self.phase = self.phase.transition(CrawlPhase::Done)?;
        tracing::info!(
            "Crawl completed: {} pages scraped, {} failed",
            self.pages.len(),
            self.failed.len()
        );

        Ok(CrawlReport {
            pages: std::mem::take(&mut self.pages),
            failed: std::mem::take(&mut self.failed),
            written_files,
        })
    }

    async fn run_single_page(
        &mut self,
        organizer: OutputOrganizer,
    ) -> Result<Vec<PathBuf>, ScrapeError> {
        let url = self.scope.base_url().to_string();
        tracing::info!("Scraping single page: {}", url);

        let (page, _) = self.scrape(&url, false).await?;
        self.phase = self.phase.transition(CrawlPhase::Draining)?;

        let written = organizer.finish_single_page(&page)?;
        self.pages.push(page);
        Ok(written)
    }

    async fn run_frontier(
        &mut self,
        mut organizer: OutputOrganizer,
    ) -> Result<Vec<PathBuf>, ScrapeError> {
        while let Some(url) = self.frontier.next_url() {
            tracing::info!("Scraping: {}", url);

            match self.scrape(&url, true).await {
                Ok((page, links)) => {
                    organizer.add_page(&page);
                    self.pages.push(page);

                    for link in links {
                        if self.frontier.push(&link) {
                            tracing::debug!("Queued {}", link);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Error scraping {}: {}", url, e);
                    self.failed.push(url);
                }
            }

            if !self.frontier.is_empty() {
                self.delay.wait().await;
            }
        }

        tracing::info!("Frontier is empty, writing output");
        self.phase = self.phase.transition(CrawlPhase::Draining)?;

        organizer.finish(&self.pages)
    }

    /// Fetches a URL and turns it into a page
    ///
    /// Returns the page together with the in-scope links discovered on it
    /// (none when `discover` is false or link discovery failed).
    async fn scrape(
        &mut self,
        url: &str,
        discover: bool,
    ) -> Result<(Page, Vec<String>), ScrapeError> {
        let body = fetch_page(&self.client, url).await?;
        self.build_page(url, &body, discover)
    }

    fn build_page(
        &mut self,
        url: &str,
        body: &str,
        discover: bool,
    ) -> Result<(Page, Vec<String>), ScrapeError> {
        let mut document = HtmlDocument::parse(body);

        let links = if discover {
            match discover_links(&document, url, &self.scope, self.frontier.visited()) {
                Ok(links) => {
                    tracing::debug!("Discovered {} in-scope links on {}", links.len(), url);
                    links
                }
                Err(e) => {
                    tracing::warn!("Error getting links from {}: {}", url, e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        let content = extract_content(&mut document, url, &self.scope)?;
        let filename = self.filenames.claim(&content.title, url);

        Ok((Page::from_content(url, content, filename), links))
    }
}
