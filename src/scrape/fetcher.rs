use super::{extract_visible_text, ContentFetcher};
use crate::constants::BROWSER_USER_AGENT;
use crate::errors::Error;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// HTTP-backed [`ContentFetcher`] using reqwest.
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    max_chars: usize,
}

impl HttpFetcher {
    /// Creates a fetcher with the given request timeout and storage cap.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration, max_chars: usize) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| Error::Fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(HttpFetcher { client, max_chars })
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, Error> {
        let parsed = url::Url::parse(url)
            .map_err(|e| Error::Fetch(format!("invalid url '{}': {}", url, e)))?;
        debug!("fetching {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned HTTP {}", url, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;
        info!("fetched {} ({} bytes of HTML)", url, body.len());

        Ok(extract_visible_text(&body, self.max_chars))
    }
}
