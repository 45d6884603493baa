// src/links/html.rs
// =============================================================================
// This module extracts href values from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still parses
//
// The values come back raw: relative, absolute or malformed, exactly as they
// appear in the document. Resolving them is somebody else's job.
// =============================================================================

use std::sync::OnceLock;

use scraper::{Html, Selector};

// Parsed once and reused for every page
fn anchor_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    // "a[href]" is a constant, known-valid selector
    SELECTOR.get_or_init(|| Selector::parse("a[href]").expect("valid selector"))
}

// Extracts every <a href> value from HTML content, in document order
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = ["/docs", "#top"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(anchor_selector())
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why OnceLock?
//    - Selector::parse does real work (it parses CSS)
//    - A crawl parses many pages with the same selector
//    - OnceLock builds it the first time and hands out &'static afterwards
//
// 2. Why trim()?
//    - Browsers ignore leading/trailing whitespace in href values
//    - `<a href=" /docs ">` should behave like `<a href="/docs">`
//
// 3. Why filter_map?
//    - attr() returns Option<&str>
//    - filter_map drops the None values and unwraps the Some values in one go
// -----------------------------------------------------------------------------
