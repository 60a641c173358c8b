//! Scrapers for the formula1.com press-conference archive.
//!
//! Two fetch targets, both plain HTTP GET through one shared client:
//!
//! | Target | Module | What it yields |
//! |--------|--------|----------------|
//! | Tag listing pages | [`listing`] | Article links with parsed metadata |
//! | Individual articles | [`article`] | Body paragraphs in document order |
//!
//! Requests are issued strictly sequentially — one in flight at a time —
//! and HTTP failures (non-2xx, timeout) propagate to the caller and abort
//! the run. Parse failures never do; they degrade to empty metadata or a
//! skipped paragraph.

use reqwest::Client;
use std::time::Duration;

pub mod article;
pub mod listing;

/// User agent sent on every request.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout; expiry is an error, not a retry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client with the fixed user agent and timeout.
pub fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
}

/// GET a page and return its body, treating non-2xx statuses as errors.
pub(crate) async fn fetch_text(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await
}
