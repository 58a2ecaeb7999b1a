/// Crawl phase definitions for tracking the progress of a run
///
/// A run moves strictly forward: `Idle -> Running -> Draining -> Done`.
use crate::ScrapeError;
use std::fmt;

/// Represents the current phase of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrawlPhase {
    /// Configured but not started
    #[default]
    Idle,

    /// Frontier loop is fetching and extracting pages
    Running,

    /// Frontier is empty; final output is being written
    Draining,

    /// Final output written
    Done,
}

impl CrawlPhase {
    /// Returns true if moving from `self` to `next` is allowed
    pub fn can_transition_to(&self, next: CrawlPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running) | (Self::Running, Self::Draining) | (Self::Draining, Self::Done)
        )
    }

    /// Returns the phase after a valid transition
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlPhase)` - The new phase
    /// * `Err(ScrapeError::InvalidTransition)` - The transition is not allowed
    pub fn transition(self, next: CrawlPhase) -> Result<CrawlPhase, ScrapeError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ScrapeError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Draining => "draining",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}
