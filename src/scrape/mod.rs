mod extract;
mod fetcher;

pub use extract::extract_visible_text;
pub use fetcher::HttpFetcher;

use crate::errors::Error;
use async_trait::async_trait;

/// Retrieves a web page and reduces it to readable text.
///
/// Implementations must bound the request with a timeout so a slow site can
/// never hang the worker.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetches `url` and returns its visible text, whitespace-collapsed and
    /// truncated to the configured storage cap.
    async fn fetch(&self, url: &str) -> Result<String, Error>;
}
