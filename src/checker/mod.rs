// src/checker/mod.rs
// =============================================================================
// This module contains everything the crawler does with a single URL.
//
// Submodules:
// - http: Fetches the page and sorts the response into broken / failed / ok
// - html: Extracts same-origin links from a fetched page
// - classify: Flags URLs that look like access-control candidates
//
// None of these know about depth, the visited set or the report; that is
// the job of the crawl module.
// =============================================================================

mod classify;
mod html;
mod http;

// Re-export public items from submodules
// This lets users write `checker::Fetcher` instead of `checker::http::Fetcher`
pub use classify::Classifier;
pub use html::{extract_links, is_crawlable, normalize};
pub use http::{FetchOutcome, Fetcher};
