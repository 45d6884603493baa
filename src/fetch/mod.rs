// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's HTTP transport.
//
// The crawl engine only ever talks to the `Fetcher` trait, which has a single
// operation: give me the body of this URL, or tell me why you couldn't.
// `HttpFetcher` is the real implementation on top of reqwest; tests plug in
// an in-memory site instead.
//
// Rust concepts:
// - Traits: The seam between the engine and the network
// - async-trait: Lets us use async methods in a trait object
// - thiserror: Derives Display/Error for our error enum
// =============================================================================

mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpFetcher;

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct Page {
    pub body: String,
    /// Value of the Content-Type header, if the server sent one
    pub content_type: Option<String>,
}

impl Page {
    /// Whether links should be extracted from this page.
    ///
    /// A missing Content-Type is treated as HTML.
    pub fn is_html(&self) -> bool {
        match &self.content_type {
            Some(ct) => ct.to_ascii_lowercase().contains("html"),
            None => true,
        }
    }
}

/// Why a page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// Errors worth another attempt: timeouts, refused connections and
    /// server-side failures.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Timeout | FetchError::Connect(_) => true,
            FetchError::Status(code) => (500..600).contains(code),
            FetchError::TooManyRedirects | FetchError::Other(_) => false,
        }
    }
}

// Sorts reqwest's errors into the variants above
impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_redirect() {
            FetchError::TooManyRedirects
        } else if error.is_connect() {
            FetchError::Connect(error.to_string())
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Other(error.to_string())
        }
    }
}

/// Something that can turn a URL into a page body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_content_type_is_html() {
        let page = Page {
            body: String::new(),
            content_type: None,
        };
        assert!(page.is_html());
    }

    #[test]
    fn test_content_type_detection() {
        let xhtml = Page {
            body: String::new(),
            content_type: Some("application/xhtml+xml; charset=utf-8".to_string()),
        };
        let pdf = Page {
            body: String::new(),
            content_type: Some("application/pdf".to_string()),
        };
        assert!(xhtml.is_html());
        assert!(!pdf.is_html());
    }

    #[test]
    fn test_transient_errors() {
        assert!(FetchError::Timeout.is_transient());
        assert!(FetchError::Status(503).is_transient());
        assert!(FetchError::Connect("refused".into()).is_transient());
        assert!(!FetchError::Status(404).is_transient());
        assert!(!FetchError::TooManyRedirects.is_transient());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP 404");
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
    }
}
