// src/checker/classify.rs
// =============================================================================
// This module decides whether a URL is worth a manual access-control review
// (a "BAC/IDOR candidate").
//
// A URL is flagged when either heuristic fires:
// 1. Numeric identifier:
//      - a query parameter such as ?id=42 or &user_id=7 whose value is all digits
//      - a path segment made only of digits, like /orders/123 or /orders/123/
// 2. Keyword: the lowercased URL contains one of the configured words
//    (admin, config, backup, ...) anywhere, as a plain substring
//
// Both checks are deliberately loose. "/blog/2024" and "/userdata" are
// flagged too; reviewers would rather skim a false positive than miss an
// admin page.
//
// The classifier is a pure function of the URL text: no I/O, no state.
// =============================================================================

use regex::Regex;

use crate::config::ScanConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Classifier {
    keywords: Vec<String>,
    id_pattern: Regex,
}

impl Classifier {
    /// Builds a classifier from a keyword list and identifier parameter names
    pub fn new<K, P>(keywords: K, id_params: P) -> Result<Self>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let params: Vec<String> = id_params
            .into_iter()
            .map(|p| regex::escape(p.as_ref()))
            .collect();

        // Without any parameter names only the path-segment rule remains
        let pattern = if params.is_empty() {
            r"/[0-9]+(?:/|$)".to_string()
        } else {
            format!(
                r"[?&](?:{})=[0-9]+(?:[&#]|$)|/[0-9]+(?:/|$)",
                params.join("|")
            )
        };

        Ok(Self {
            keywords,
            id_pattern: Regex::new(&pattern)?,
        })
    }

    /// Builds a classifier from the vocabulary stored in a ScanConfig
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(&config.keywords, &config.id_params)
    }

    /// Returns true if `url` looks like a sensitive endpoint
    pub fn classify(&self, url: &str) -> bool {
        self.has_numeric_id(url) || self.has_keyword(url)
    }

    fn has_numeric_id(&self, url: &str) -> bool {
        self.id_pattern.is_match(url)
    }

    fn has_keyword(&self, url: &str) -> bool {
        let lowered = url.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}
