// src/crawl/stack.rs
// =============================================================================
// This module implements the crawl itself as a depth-first walk.
//
// How it works:
// 1. Put (seed, depth 0) on a stack
// 2. Pop an item; skip it if it is too deep or already visited
// 3. Mark it visited and fetch it
// 4. Broken page      -> record (status, url), do not look inside
//    Transport error  -> drop it silently, the run goes on
//    Success          -> classify the URL, then push the page's links
//                        at depth + 1 (in reverse, so the first link in the
//                        markup is popped first)
// 5. Repeat until the stack is empty or the run is cancelled
//
// An explicit stack instead of recursion keeps the call stack flat no matter
// how deep the crawl goes, while producing exactly the order a recursive
// depth-first walk would.
//
// Limits:
// - There is no cap on the number of pages. Only the depth bound and the
//   visited set stop the walk, so a site that generates endless distinct
//   same-origin URLs within the depth bound keeps the crawler busy.
// - One request at a time, no delay between requests.
// =============================================================================

use std::collections::HashSet;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use url::Url;

use crate::checker::{extract_links, Classifier, FetchOutcome, Fetcher};
use crate::config::ScanConfig;
use crate::crawl::events::{BrokenLink, CrawlResult, LogEvent};
use crate::crawl::target::CrawlTarget;
use crate::error::Result;

// Represents a page waiting on the stack
#[derive(Debug, Clone)]
struct CrawlItem {
    url: String,
    depth: usize, // How many links away from the seed (seed = 0)
}

/// The traversal engine: a fetcher and a classifier, driven depth-first
#[derive(Debug, Clone)]
pub struct Crawler {
    fetcher: Fetcher,
    classifier: Classifier,
}

impl Crawler {
    /// Builds a crawler whose fetcher and classifier follow `config`
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            classifier: Classifier::from_config(config)?,
        })
    }

    pub fn from_parts(fetcher: Fetcher, classifier: Classifier) -> Self {
        Self { fetcher, classifier }
    }

    // Crawls `target` and returns the finished report
    //
    // Every visited URL, broken link and candidate is also sent to `events`
    // as it happens. A closed receiver is fine: the crawl just keeps going.
    // `cancel` is checked before each page and while a fetch is in flight.
    pub async fn crawl(
        &self,
        target: &CrawlTarget,
        events: &UnboundedSender<LogEvent>,
        cancel: &CancellationToken,
    ) -> CrawlResult {
        let max_depth = target.max_depth();
        let mut visited: HashSet<String> = HashSet::new();
        let mut result = CrawlResult::default();

        let mut stack = vec![CrawlItem {
            url: target.seed_str(),
            depth: 0,
        }];

        info!("Starting crawl of {} (max depth {})", target.seed(), max_depth);

        while let Some(item) = stack.pop() {
            if cancel.is_cancelled() {
                result.cancelled = true;
                break;
            }

            if item.depth > max_depth || visited.contains(&item.url) {
                continue;
            }

            visited.insert(item.url.clone());
            emit(events, LogEvent::Crawling { url: item.url.clone() });

            let outcome = tokio::select! {
                outcome = self.fetcher.fetch(&item.url) => outcome,
                _ = cancel.cancelled() => {
                    result.cancelled = true;
                    break;
                }
            };

            let body = match outcome {
                FetchOutcome::Broken(status) => {
                    emit(events, LogEvent::BrokenLink { status, url: item.url.clone() });
                    result.broken.push(BrokenLink { status, url: item.url });
                    continue;
                }
                FetchOutcome::TransportError(_) => continue,
                FetchOutcome::Success(body) => body,
            };

            if self.classifier.classify(&item.url) {
                emit(events, LogEvent::Candidate { url: item.url.clone() });
                result.sensitive.push(item.url.clone());
            }

            // Children of a node at max depth would be skipped anyway
            if item.depth >= max_depth {
                continue;
            }

            let page_url = match Url::parse(&item.url) {
                Ok(url) => url,
                Err(_) => continue,
            };

            let links = extract_links(&page_url, &body, target.seed());
            debug!("{} link(s) on {}", links.len(), item.url);

            for link in links.into_iter().rev() {
                stack.push(CrawlItem {
                    url: link,
                    depth: item.depth + 1,
                });
            }
        }

        result.total_visited = visited.len();

        info!(
            "Crawl finished: {} visited, {} broken, {} candidate(s){}",
            result.total_visited,
            result.broken.len(),
            result.sensitive.len(),
            if result.cancelled { " (cancelled)" } else { "" }
        );

        result
    }
}

// Forwards a log event; a dropped receiver is not our problem
fn emit(events: &UnboundedSender<LogEvent>, event: LogEvent) {
    debug!("{}", event);
    let _ = events.send(event);
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why check `visited` when popping instead of when pushing?
//    - A recursive walk checks when it enters a node, so we do the same
//    - A link pushed twice (from two different pages) is fetched once:
//      whichever copy is popped first wins, the other is skipped
//
// 2. Why push links in reverse?
//    - A Vec used as a stack pops from the end
//    - Reversing makes the first link in the page come out first,
//      which keeps the report in document order
//
// 3. What does tokio::select! do here?
//    - It races the fetch against the cancellation token
//    - Whichever finishes first wins; the other future is dropped
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_cancelled_before_start_visits_nothing() {
        let crawler = Crawler::new(&ScanConfig::default()).unwrap();
        let target = CrawlTarget::new("http://127.0.0.1:1/", 3).unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = crawler.crawl(&target, &tx, &cancel).await;
        assert!(result.cancelled);
        assert_eq!(result.total_visited, 0);
        drop(tx);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_seed_counts_as_visited() {
        let crawler = Crawler::new(&ScanConfig::default()).unwrap();
        let target = CrawlTarget::new("http://127.0.0.1:1/", 3).unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();

        let result = crawler.crawl(&target, &tx, &CancellationToken::new()).await;
        assert_eq!(result.total_visited, 1);
        assert!(result.broken.is_empty());
        assert!(result.sensitive.is_empty());
        assert!(!result.cancelled);
    }

    #[tokio::test]
    async fn test_closed_log_receiver_does_not_stop_crawl() {
        let crawler = Crawler::new(&ScanConfig::default()).unwrap();
        let target = CrawlTarget::new("http://127.0.0.1:1/", 0).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        let result = crawler.crawl(&target, &tx, &CancellationToken::new()).await;
        assert_eq!(result.total_visited, 1);
    }
}
