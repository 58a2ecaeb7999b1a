//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CrawlPhase`: Tracks the phase of a run (idle, running, draining, done)

mod crawl_phase;

// Re-export main types
pub use crawl_phase::CrawlPhase;
