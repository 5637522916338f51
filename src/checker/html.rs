// src/checker/html.rs
// =============================================================================
// This module extracts the links the crawler should follow from an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which repairs broken markup instead of failing
//
// We also use the `url` crate to:
// - Resolve relative links against the page they appear on
// - Drop the #fragment part, so /page and /page#top are the same node
// - Compare origins (scheme + host + port) with the seed URL
//
// Rust concepts:
// - Option<T>: For links that cannot be turned into a crawlable URL
// - HashSet: To keep each link only once while preserving document order
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Extracts crawlable links from an HTML page
//
// Parameters:
//   page_url: the URL the HTML was fetched from (for relative links)
//   html: the page body
//   seed: the crawl's starting URL; only links on its origin are kept
//
// Returns: absolute URLs, without fragments, in the order they first
// appear in the markup
//
// Example:
//   page_url = "https://example.com/docs/"
//   html = "<a href='intro#top'>Intro</a> <a href='https://other.com'>x</a>"
//   result = ["https://example.com/docs/intro"]
pub fn extract_links(page_url: &Url, html: &str, seed: &Url) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    let document = Html::parse_document(html);

    // "a[href]" means "all <a> tags that have an href attribute"
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return links,
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Some(url) = resolve_link(page_url, href) else {
            continue;
        };

        if is_crawlable(&url, seed) {
            let url = url.to_string();
            if seen.insert(url.clone()) {
                links.push(url);
            }
        }
    }

    links
}

// Resolves an href against the page URL and strips its fragment
//
// Returns None when the href cannot be resolved at all
fn resolve_link(page_url: &Url, href: &str) -> Option<Url> {
    let mut url = page_url.join(href.trim()).ok()?;
    url.set_fragment(None);
    Some(url)
}

/// True if `url` is well-formed (has a host) and shares the seed's origin
///
/// `mailto:`, `javascript:` and other host-less links fail the first test;
/// links to another host, port or scheme fail the second.
pub fn is_crawlable(url: &Url, seed: &Url) -> bool {
    let has_host = url.host_str().is_some_and(|h| !h.is_empty());
    has_host && url.origin() == seed.origin()
}

// Normalizes a URL string the same way extracted links are normalized
//
// Used for the seed so "http://example.com" and "http://example.com/"
// count as the same visited node.
pub fn normalize(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.to_string()
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why compare url.origin() instead of the host string?
//    - origin() is the (scheme, host, port) tuple browsers use
//    - http://example.com and https://example.com are different origins
//    - so are example.com:80 and example.com:8080
//
// 2. Why is the seed passed in separately from page_url?
//    - The crawl scope is fixed when the crawl starts
//    - If a page redirects or lives on a sub-path, links are still checked
//      against the seed's origin, never the current page's
//
// 3. What happens with broken HTML?
//    - html5ever always produces a DOM, the way browsers do
//    - Unclosed tags or stray brackets just give us fewer links
// -----------------------------------------------------------------------------
