//! trinetra - broken link and access-control candidate finder
//!
//! Crawls a website depth-first within its own origin and reports:
//! - broken links (pages answering with HTTP 400 or above)
//! - BAC/IDOR candidates (URLs with numeric identifiers or admin-ish keywords)
//! - how many distinct URLs were visited
//!
//! ```no_run
//! use trinetra::{CrawlTarget, Crawler, ScanConfig};
//!
//! # async fn demo() -> trinetra::Result<()> {
//! let crawler = Crawler::new(&ScanConfig::default())?;
//! let mut handle = crawler.start(CrawlTarget::new("http://example.com", 2)?);
//! while let Some(event) = handle.next_log().await {
//!     println!("{event}");
//! }
//! let report = handle.finish().await?;
//! println!("visited {} URLs", report.total_visited);
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod crawl;
pub mod error;
pub mod report;

pub use config::ScanConfig;
pub use crawl::{BrokenLink, CrawlHandle, CrawlResult, CrawlTarget, Crawler, LogEvent};
pub use error::{Result, ScanError};
