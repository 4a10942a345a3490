//! The page-fetching capability the engine consumes.

use std::future::Future;

use itchio_api::{Client, Error, REQUEST_TIMEOUT, SITE_URL};

/// Fetches raw page text. Implemented by [`itchio_api::Client`]; tests
/// substitute in-memory fetchers.
pub trait PageFetcher: Send + Sync {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, Error>> + Send;

    /// Site root that search queries are issued against.
    fn site_url(&self) -> &str {
        SITE_URL
    }
}

impl PageFetcher for Client {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String, Error>> + Send {
        Client::fetch_page(self, url)
    }

    fn site_url(&self) -> &str {
        self.base_url()
    }
}

/// Fetches a page under the per-fetch timeout. Timeouts and transport
/// errors are logged and yield `None`.
pub async fn fetch_document<F: PageFetcher>(fetcher: &F, url: &str) -> Option<String> {
    match tokio::time::timeout(REQUEST_TIMEOUT, fetcher.fetch_page(url)).await {
        Ok(Ok(html)) => Some(html),
        Ok(Err(e)) => {
            tracing::warn!("Fetch of {} failed: {}", url, e);
            None
        }
        Err(_) => {
            tracing::warn!("Fetch of {} timed out after {:?}", url, REQUEST_TIMEOUT);
            None
        }
    }
}
