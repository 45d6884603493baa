// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl itself, depth-first.
//
// How it works:
// 1. Claim the URL in the tracker (skip it if seen, drop it if the budget is
//    spent). Claiming happens BEFORE fetching, so a page that fails is never
//    tried again in the same run.
// 2. Fetch the page. A failure is logged and ends this branch only.
// 3. Extract hrefs, resolve them against the page, keep the in-scope ones.
// 4. Walk those links one by one. Each unseen link is fully explored (with all
//    of its descendants) before the next sibling is looked at.
// 5. When a page has no links left, wait the configured delay.
//
// Instead of recursing, we keep an explicit stack of frames: one per page
// whose links are still being walked. The visited check happens when a link
// comes off its frame, which gives exactly the order a recursive crawl would.
// Deep link chains therefore cost heap, not call stack.
// =============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::report::{CrawlReport, FailedPage};
use super::scope::Scope;
use super::tracker::{Claim, VisitedTracker};
use crate::config::CrawlConfig;
use crate::fetch::Fetcher;
use crate::links;

// A page whose in-scope links are still being walked
struct Frame {
    url: String,
    links: std::vec::IntoIter<String>,
}

pub struct Crawler<F> {
    config: CrawlConfig,
    fetcher: F,
    scope: Scope,
    tracker: VisitedTracker,
    failed: Vec<FailedPage>,
    cancel: Arc<AtomicBool>,
    cancelled: bool,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        let scope = Scope::new(config.seed());
        let tracker = VisitedTracker::new(config.page_limit());

        Self {
            config,
            fetcher,
            scope,
            tracker,
            failed: Vec::new(),
            cancel: Arc::new(AtomicBool::new(false)),
            cancelled: false,
        }
    }

    /// Shares a cancellation flag with the crawler.
    ///
    /// Once the flag is set no new fetch is started. A fetch already in
    /// flight is allowed to finish.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn tracker(&self) -> &VisitedTracker {
        &self.tracker
    }

    /// Crawls from the configured seed.
    pub async fn run(&mut self) {
        let seed = self.config.seed().to_string();
        self.crawl(&seed).await;
    }

    /// Visits `url` and everything reachable from it that is in scope,
    /// until the page budget runs out.
    ///
    /// Never fails: per-page problems are logged and recorded in the report.
    pub async fn crawl(&mut self, url: &str) {
        let mut stack: Vec<Frame> = Vec::new();

        if let Some(frame) = self.visit(url).await {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            if self.is_cancelled() {
                break;
            }
            if self.tracker.is_full() {
                info!(limit = self.tracker.limit(), "Page limit reached, stopping crawl");
                break;
            }

            match frame.links.next() {
                Some(link) => {
                    if self.tracker.has_visited(&link) {
                        continue;
                    }
                    if let Some(child) = self.visit(&link).await {
                        stack.push(child);
                    }
                }
                None => {
                    // This page and everything under it is done
                    if let Some(done) = stack.pop() {
                        debug!(url = %done.url, "finished page");
                    }
                    tokio::time::sleep(self.config.delay()).await;
                }
            }
        }
    }

    // One per-URL step: claim, fetch, extract. Returns the page's frame, or
    // None if the URL was skipped.
    async fn visit(&mut self, url: &str) -> Option<Frame> {
        if self.is_cancelled() {
            return None;
        }

        match self.tracker.try_claim(url) {
            Claim::Claimed => {}
            Claim::AlreadyVisited => return None,
            Claim::BudgetExhausted => {
                info!(url, "Limit reached, not crawling");
                return None;
            }
        }

        info!(url, "Crawling URL");

        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(error) => {
                warn!(url, %error, "Error crawling");
                self.failed.push(FailedPage {
                    url: url.to_string(),
                    error: error.to_string(),
                });
                return Some(Frame {
                    url: url.to_string(),
                    links: Vec::new().into_iter(),
                });
            }
        };

        let links = if page.is_html() {
            self.in_scope_links(url, &page.body)
        } else {
            debug!(url, content_type = ?page.content_type, "not HTML, no links extracted");
            Vec::new()
        };

        Some(Frame {
            url: url.to_string(),
            links: links.into_iter(),
        })
    }

    fn in_scope_links(&self, page_url: &str, body: &str) -> Vec<String> {
        let mut found = Vec::new();

        for href in links::extract_hrefs(body) {
            let absolute = match links::resolve(page_url, &href) {
                Ok(absolute) => absolute,
                Err(error) => {
                    debug!(page = page_url, %error, "skipping href");
                    continue;
                }
            };

            if self.scope.contains(&absolute) {
                debug!(page = page_url, link = %absolute, "Found internal link");
                found.push(absolute);
            }
        }

        found
    }

    fn is_cancelled(&mut self) -> bool {
        if !self.cancelled && self.cancel.load(Ordering::Relaxed) {
            warn!("Crawl cancelled, no further pages will be fetched");
            self.cancelled = true;
        }
        self.cancelled
    }

    /// Summarizes the run. The tracker stays readable through `tracker()`
    /// until the crawler is dropped.
    pub fn report(&self) -> CrawlReport {
        CrawlReport {
            seed: self.config.seed().to_string(),
            visited: self.tracker.snapshot_ordered().to_vec(),
            failed: self.failed.clone(),
            limit_reached: self.tracker.is_full(),
            cancelled: self.cancelled,
        }
    }
}
