// src/config.rs
// =============================================================================
// Crawl configuration.
//
// A CrawlConfig is built once from the command line and never changes during
// a run. Building it is the only place a bad seed URL or a zero page limit
// can be rejected, so it happens before any request is made.
// =============================================================================

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Delay between fetches when none is given.
pub const DEFAULT_DELAY_MS: u64 = 50;

/// Maximum number of distinct pages visited when no limit is given.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid seed URL '{seed}': {source}")]
    InvalidSeed {
        seed: String,
        #[source]
        source: url::ParseError,
    },

    #[error("seed URL '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("page limit must be at least 1")]
    ZeroPageLimit,
}

/// Immutable parameters of one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    seed: String,
    delay: Duration,
    page_limit: usize,
}

impl CrawlConfig {
    /// Validates the inputs and builds a config.
    ///
    /// The seed is kept exactly as given: it is both the first URL fetched
    /// and the literal prefix every followed link must start with.
    pub fn new(seed: &str, delay_ms: u64, page_limit: usize) -> Result<Self, ConfigError> {
        let parsed = Url::parse(seed).map_err(|source| ConfigError::InvalidSeed {
            seed: seed.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(seed.to_string()));
        }

        if page_limit == 0 {
            return Err(ConfigError::ZeroPageLimit);
        }

        Ok(Self {
            seed: seed.to_string(),
            delay: Duration::from_millis(delay_ms),
            page_limit,
        })
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn page_limit(&self) -> usize {
        self.page_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_keeps_seed_verbatim() {
        let config = CrawlConfig::new("https://example.com", 10, 5).unwrap();
        assert_eq!(config.seed(), "https://example.com");
        assert_eq!(config.delay(), Duration::from_millis(10));
        assert_eq!(config.page_limit(), 5);
    }

    #[test]
    fn test_relative_seed_rejected() {
        let err = CrawlConfig::new("/docs", 0, 5).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed { .. }));
    }

    #[test]
    fn test_non_http_seed_rejected() {
        let err = CrawlConfig::new("ftp://example.com/", 0, 5).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = CrawlConfig::new("https://example.com/", 0, 0).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageLimit));
    }
}
