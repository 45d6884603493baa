// src/sitemap/write.rs
// =============================================================================
// Saves a rendered sitemap to a file.
//
// tokio::fs::write opens, writes and closes the file in one call, so the
// handle is released on every path, error or not.
// =============================================================================

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use super::SitemapDocument;

#[derive(Debug, Error)]
#[error("failed to write sitemap to {}: {source}", path.display())]
pub struct PersistError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

pub async fn persist(document: &SitemapDocument, path: &Path) -> Result<(), PersistError> {
    tokio::fs::write(path, document.as_str())
        .await
        .map_err(|source| PersistError {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), urls = document.url_count(), "Sitemap saved");
    Ok(())
}
