// src/fetch/http.rs
// =============================================================================
// The real page fetcher, built on reqwest.
//
// Key functionality:
// - One shared Client (connection pooling, per-request timeout)
// - Non-2xx responses are errors
// - Transient failures (timeouts, connect errors, 5xx) are retried a bounded
//   number of times with a linear backoff
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::debug;

use super::{FetchError, Fetcher, Page};

const USER_AGENT: &str = concat!("site-mapper/", env!("CARGO_PKG_VERSION"));

// Backoff before retry N is N times this
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

pub struct HttpFetcher {
    client: Client,
    retries: u32,
}

impl HttpFetcher {
    /// Builds a fetcher.
    ///
    /// `timeout` applies to each attempt; `retries` is how many extra
    /// attempts a transient failure gets.
    pub fn new(timeout: Duration, retries: u32) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client, retries })
    }

    async fn fetch_once(&self, url: &str) -> Result<Page, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await?;

        Ok(Page { body, content_type })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Page, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url).await {
                Ok(page) => return Ok(page),
                Err(error) if error.is_transient() && attempt < self.retries => {
                    attempt += 1;
                    debug!(url, attempt, %error, "retrying fetch");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(error) => return Err(error),
            }
        }
    }
}
