//! Crawl frontier
//!
//! A FIFO queue of URLs awaiting a fetch plus the set of URLs already
//! processed. FIFO order makes the crawl breadth-first.

use std::collections::{HashSet, VecDeque};

/// Queue of pending URLs and the set of processed URLs for one crawl
///
/// Invariants:
/// - a URL enters `visited` at most once
/// - a URL is never queued while it is queued or visited
#[derive(Debug, Default)]
pub struct Frontier {
    /// URLs awaiting a fetch attempt, oldest first
    queue: VecDeque<String>,

    /// URLs currently in `queue`
    queued: HashSet<String>,

    /// URLs already dequeued, whether their fetch succeeded or not
    visited: HashSet<String>,
}

impl Frontier {
    /// Creates a frontier whose only member is the seed URL
    pub fn with_seed(seed: &str) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed);
        frontier
    }

    /// Adds a URL at the back of the queue
    ///
    /// # Returns
    ///
    /// `true` if the URL was queued, `false` if it was already queued or visited
    pub fn push(&mut self, url: &str) -> bool {
        if self.visited.contains(url) || self.queued.contains(url) {
            return false;
        }

        self.queued.insert(url.to_string());
        self.queue.push_back(url.to_string());
        true
    }

    /// Takes the next URL to process and marks it visited
    ///
    /// Returns `None` once the queue is empty.
    pub fn next_url(&mut self) -> Option<String> {
        while let Some(url) = self.queue.pop_front() {
            self.queued.remove(&url);
            if self.visited.insert(url.clone()) {
                return Some(url);
            }
            tracing::debug!("Discarding already visited URL {}", url);
        }

        None
    }

    /// Returns the set of processed URLs
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Returns the number of URLs waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
