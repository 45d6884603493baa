// src/sitemap/mod.rs
// =============================================================================
// This module turns the list of visited URLs into a sitemaps.org XML file.
//
// Submodules:
// - render: builds the XML document (pure, no I/O)
// - write: saves a rendered document to disk
//
// Rendering can't fail. Writing can, but a failed write never touches the
// crawl result the document was rendered from.
// =============================================================================

mod render;
mod write;

pub use render::{render, SitemapDocument};
pub use write::persist;
