// src/crawl/tracker.rs
// =============================================================================
// Tracks which URLs this crawl has visited and how much budget is left.
//
// Two invariants live here and nowhere else:
// - a URL is recorded at most once (exact string match, no normalization)
// - the number of recorded URLs never exceeds the page limit
//
// URLs are kept in first-visit order so the sitemap comes out deterministic.
// =============================================================================

use std::collections::HashSet;

use thiserror::Error;

/// Returned when a URL is offered to a tracker that has no room left.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("page limit of {limit} reached")]
pub struct BudgetExhausted {
    pub limit: usize,
}

/// Outcome of offering a URL to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The URL was recorded; the caller now owns fetching it
    Claimed,
    AlreadyVisited,
    BudgetExhausted,
}

#[derive(Debug)]
pub struct VisitedTracker {
    order: Vec<String>,
    seen: HashSet<String>,
    limit: usize,
}

impl VisitedTracker {
    pub fn new(limit: usize) -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
            limit,
        }
    }

    pub fn has_visited(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn is_full(&self) -> bool {
        self.order.len() >= self.limit
    }

    /// Records `url`.
    ///
    /// Returns `Ok(false)` if it was already recorded and `Ok(true)` if it was
    /// added. A full tracker refuses new URLs instead of growing past its
    /// limit.
    pub fn mark_visited(&mut self, url: &str) -> Result<bool, BudgetExhausted> {
        if self.has_visited(url) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(BudgetExhausted { limit: self.limit });
        }

        self.seen.insert(url.to_string());
        self.order.push(url.to_string());
        Ok(true)
    }

    /// Checks membership and budget and records the URL in one step.
    pub fn try_claim(&mut self, url: &str) -> Claim {
        match self.mark_visited(url) {
            Ok(true) => Claim::Claimed,
            Ok(false) => Claim::AlreadyVisited,
            Err(_) => Claim::BudgetExhausted,
        }
    }

    /// Visited URLs in the order they were first recorded.
    pub fn snapshot_ordered(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
