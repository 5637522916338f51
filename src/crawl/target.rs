// src/crawl/target.rs
// =============================================================================
// The validated input of one crawl run: where to start and how deep to go.
//
// Validation happens here, before any run is spawned, so a bad request is
// reported straight back to the caller instead of producing an empty report.
// =============================================================================

use url::Url;

use crate::checker::normalize;
use crate::error::{Result, ScanError};

// Seed URL plus maximum depth, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    seed: Url,
    max_depth: usize,
}

impl CrawlTarget {
    /// Validates `seed_url` and pairs it with `max_depth`
    ///
    /// The URL must parse, use http or https and name a host.
    /// Depth 0 means "fetch the seed only".
    pub fn new(seed_url: &str, max_depth: usize) -> Result<Self> {
        let trimmed = seed_url.trim();

        let seed = Url::parse(trimmed).map_err(|source| ScanError::InvalidUrl {
            url: trimmed.to_string(),
            source,
        })?;

        if seed.scheme() != "http" && seed.scheme() != "https" {
            return Err(ScanError::UnsupportedScheme(trimmed.to_string()));
        }

        if seed.host_str().map_or(true, str::is_empty) {
            return Err(ScanError::MissingHost(trimmed.to_string()));
        }

        Ok(Self { seed, max_depth })
    }

    pub fn seed(&self) -> &Url {
        &self.seed
    }

    /// The seed in the same normalized form used for the visited set
    pub fn seed_str(&self) -> String {
        normalize(&self.seed)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        let target = CrawlTarget::new("http://example.com", 2).unwrap();
        assert_eq!(target.seed_str(), "http://example.com/");
        assert_eq!(target.max_depth(), 2);

        assert!(CrawlTarget::new("https://example.com/start#intro", 0).is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let err = CrawlTarget::new("example.com", 1).unwrap_err();
        assert!(matches!(err, ScanError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_other_schemes() {
        let err = CrawlTarget::new("ftp://example.com", 1).unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedScheme(_)));

        let err = CrawlTarget::new("mailto:admin@example.com", 1).unwrap_err();
        assert!(matches!(err, ScanError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(CrawlTarget::new("   ", 1).is_err());
    }

    #[test]
    fn test_seed_fragment_is_dropped() {
        let target = CrawlTarget::new("https://example.com/start#intro", 0).unwrap();
        assert_eq!(target.seed_str(), "https://example.com/start");
    }
}
