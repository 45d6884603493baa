// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Only follows links that start with the seed URL
// - Never visits a URL twice, never visits more than the page limit
// - Polite crawling with a delay between pages
// - A failed page is logged and skipped, the rest of the crawl carries on
//
// Submodules:
// - tracker: visited set + page budget
// - scope: which discovered links may be followed
// - engine: the fetch -> extract -> follow loop
// - report: what a finished crawl looked like
// =============================================================================

mod engine;
mod report;
mod scope;
mod tracker;

pub use engine::Crawler;
pub use report::CrawlReport;
