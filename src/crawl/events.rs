// src/crawl/events.rs
// =============================================================================
// What a crawl run hands back to whoever started it.
//
// - LogEvent: one line of the live log, streamed while the crawl runs
// - CrawlResult: the final report, delivered exactly once at the end
//
// Both derive Serialize so front-ends can forward them as JSON.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

// One crawl action worth showing in the live log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    /// A URL was taken off the stack and is about to be fetched
    Crawling { url: String },
    /// The server answered with an error status
    BrokenLink { status: u16, url: String },
    /// The URL was flagged by the classifier
    Candidate { url: String },
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEvent::Crawling { url } => write!(f, "[*] Crawling: {}", url),
            LogEvent::BrokenLink { status, url } => {
                write!(f, "!!! BROKEN LINK ({}): {}", status, url)
            }
            LogEvent::Candidate { url } => write!(f, "--- CANDIDATE: {}", url),
        }
    }
}

// A URL that answered with status >= 400
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokenLink {
    pub status: u16,
    pub url: String,
}

// The accumulated report of one run
//
// `broken` and `sensitive` are in discovery order (depth-first, document order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlResult {
    /// Number of distinct URLs dispatched to the fetcher
    pub total_visited: usize,
    /// Broken links, in the order they were found
    pub broken: Vec<BrokenLink>,
    /// Access-control candidates, in the order they were found
    pub sensitive: Vec<String>,
    /// True if the run was stopped before it finished on its own
    #[serde(default)]
    pub cancelled: bool,
}

impl CrawlResult {
    /// True if the report contains anything worth looking at
    pub fn has_findings(&self) -> bool {
        !self.broken.is_empty() || !self.sensitive.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_lines() {
        let crawling = LogEvent::Crawling {
            url: "http://example.com/".to_string(),
        };
        let broken = LogEvent::BrokenLink {
            status: 404,
            url: "http://example.com/gone".to_string(),
        };
        let candidate = LogEvent::Candidate {
            url: "http://example.com/admin".to_string(),
        };

        assert_eq!(crawling.to_string(), "[*] Crawling: http://example.com/");
        assert_eq!(
            broken.to_string(),
            "!!! BROKEN LINK (404): http://example.com/gone"
        );
        assert_eq!(candidate.to_string(), "--- CANDIDATE: http://example.com/admin");
    }

    #[test]
    fn test_result_json_shape() {
        let result = CrawlResult {
            total_visited: 2,
            broken: vec![BrokenLink {
                status: 500,
                url: "http://example.com/x".to_string(),
            }],
            sensitive: vec![],
            cancelled: false,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["total_visited"], 2);
        assert_eq!(json["broken"][0]["status"], 500);
        assert!(json["sensitive"].as_array().unwrap().is_empty());
        assert!(result.has_findings());
        assert!(!CrawlResult::default().has_findings());
    }
}
