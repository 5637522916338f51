//! Error types for the crawl core
//!
//! Only problems that stop a run from starting (or from reporting back) live
//! here. A page that fails to load is not an error: it is a `FetchOutcome`.

use thiserror::Error;

/// Errors surfaced to whoever asks for a crawl
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid classifier pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Crawl run ended without delivering a result")]
    RunAborted,
}

/// Result type alias for crawl core operations
pub type Result<T> = std::result::Result<T, ScanError>;
