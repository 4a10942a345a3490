//! HTTP client for itch.io HTML pages.

use std::time::Duration;

use url::Url;

use crate::{query::Query, user_agent::get_user_agent, Error};

/// Site root of the marketplace.
pub const SITE_URL: &str = "https://itch.io";

/// Per-request timeout. A timed-out request is reported as [`Error::RequestFailed`].
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for itch.io pages.
///
/// Sends requests with browser-like headers and a randomized user agent.
/// There is no retry: one request per call, bounded by [`REQUEST_TIMEOUT`].
pub struct Client {
    /// Base URL for search pages. Defaults to `https://itch.io`.
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a new client pointing at the production site.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(SITE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The base URL search queries are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the absolute URL for a query against this client's base URL.
    pub fn query_url(&self, query: &impl Query) -> Result<Url, Error> {
        crate::query_url(&self.base_url, query)
    }

    /// Fetches the raw HTML of any absolute page URL.
    pub async fn fetch_page(&self, url: &str) -> Result<String, Error> {
        let url = Url::parse(url).map_err(|e| {
            tracing::error!("Invalid page URL {}: {}", url, e);
            Error::InvalidUrl(format!("{}: {}", url, e))
        })?;
        let resp = self
            .http
            .get(url.clone())
            .header(
                "accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header("accept-language", "en-US,en;q=0.5")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch {}: {}", url, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request to {} failed with status {}", url, status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchQuery;

    #[test]
    fn truncate_short_body_unchanged() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn truncate_long_body_respects_char_boundary() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
    }

    #[test]
    fn query_url_uses_base() {
        let client = Client::with_base_url("http://localhost:1234/").unwrap();
        let url = client.query_url(&SearchQuery::new("celeste")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/search?q=celeste");
    }

    #[test]
    fn default_base_is_site() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), SITE_URL);
    }
}
