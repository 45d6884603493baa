// src/links/mod.rs
// =============================================================================
// This module finds links in a page and turns them into absolute URLs.
//
// Submodules:
// - html: Pulls raw href values out of an HTML document
// - resolve: Resolves one href against the page it was found on
//
// The two steps are kept apart on purpose: extraction never fails, while
// resolution can fail per href and the crawl engine decides what to do about
// that (it skips the href).
// =============================================================================

mod html;
mod resolve;

pub use html::extract_hrefs;
pub use resolve::resolve;
