// src/checker/http.rs
// =============================================================================
// This module fetches one page and tells the crawler what happened.
//
// Key functionality:
// - Makes a single HTTP GET request (no retries)
// - Uses a short fixed timeout and a browser-like User-Agent
// - Sorts every response into one of three outcomes:
//     Broken(status)    -> the server answered with 400 or above
//     TransportError    -> we never got a usable answer (timeout, DNS, TLS...)
//     Success(body)     -> anything else, with the HTML text
//
// The crawler matches on FetchOutcome, so a failed request can never
// escape as an error and abort the run.
// =============================================================================

use reqwest::Client;
use tracing::debug;

use crate::config::ScanConfig;
use crate::error::Result;

// What happened when we tried to fetch a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server answered with a status code >= 400
    Broken(u16),
    /// The HTTP exchange did not complete; holds a short reason for diagnostics
    TransportError(String),
    /// The page loaded; holds the response body
    Success(String),
}

// Thin wrapper around a reqwest Client configured for crawling
//
// The client is built once per run and reused for every page,
// so connections to the target host are pooled.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher using the timeout and User-Agent from the config
    pub fn new(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` with a GET request and classifies the response
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return transport_error(url, e),
        };

        let status = response.status();
        if status.as_u16() >= 400 {
            // The body of a broken page is never read, let alone parsed
            return FetchOutcome::Broken(status.as_u16());
        }

        match response.text().await {
            Ok(body) => FetchOutcome::Success(body),
            Err(e) => transport_error(url, e),
        }
    }
}

// Turns a reqwest error into a TransportError with a readable reason
fn transport_error(url: &str, error: reqwest::Error) -> FetchOutcome {
    let reason = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_body() || error.is_decode() {
        "unreadable response body".to_string()
    } else {
        error.to_string()
    };

    debug!("Dropping {}: {}", url, reason);
    FetchOutcome::TransportError(reason)
}
