// src/config.rs
// =============================================================================
// Settings that stay fixed for the whole lifetime of one crawl run.
//
// The defaults reproduce the behaviour people expect from the tool:
// - a short 4 second timeout per page
// - a browser-like User-Agent, so sites that block unknown clients still answer
// - the access-control keyword vocabulary and identifier parameter names
//   used by the classifier
//
// Nothing here is global or mutable. A ScanConfig is built once (usually from
// the CLI arguments) and handed to the Crawler, which copies what it needs.
// =============================================================================

use std::time::Duration;

/// User-Agent header sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 4;

/// Crawl depth used when the caller does not pick one
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Substrings that make a URL look access-control relevant
pub const BAC_KEYWORDS: &[&str] = &[
    "admin", "config", "backup", "user", "profile", "account", "settings",
];

/// Query parameters that usually carry an object identifier
pub const ID_PARAMS: &[&str] = &["id", "user_id", "uid", "profile_id"];

// Everything the fetcher and the classifier need to know
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Maximum time one HTTP exchange may take
    pub timeout: Duration,
    /// Value of the User-Agent header
    pub user_agent: String,
    /// Keywords matched (lowercased, as substrings) against every URL
    pub keywords: Vec<String>,
    /// Query parameter names whose numeric value flags a URL
    pub id_params: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            keywords: BAC_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            id_params: ID_PARAMS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl ScanConfig {
    /// Replaces the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the User-Agent header value
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.keywords.len(), 7);
        assert!(config.id_params.contains(&"profile_id".to_string()));
    }

    #[test]
    fn test_builders() {
        let config = ScanConfig::default()
            .with_timeout(Duration::from_millis(250))
            .with_user_agent("trinetra-test");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.user_agent, "trinetra-test");
    }
}
