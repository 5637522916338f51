// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Same-origin restriction (never leaves the seed's scheme/host/port)
// - Configurable depth limit, each URL fetched at most once per run
// - Background runs with a live log stream and cancellation
//
// Submodules:
// - target: the validated crawl request
// - stack: the traversal engine
// - events: LogEvent and CrawlResult
// - run: CrawlHandle, the background-task wrapper
// =============================================================================

mod events;
mod run;
mod stack;
mod target;

pub use events::{BrokenLink, CrawlResult, LogEvent};
pub use run::CrawlHandle;
pub use stack::Crawler;
pub use target::CrawlTarget;
