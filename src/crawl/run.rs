// src/crawl/run.rs
// =============================================================================
// Runs a crawl in the background and hands its output back through channels.
//
// Crawler::start() spawns the crawl on a tokio task and returns a CrawlHandle:
// - logs:     an unbounded stream of LogEvents, readable while the run is going
// - finish(): waits for the single final CrawlResult
// - cancel(): asks the run to stop at the next page (or mid-fetch)
//
// The log channel is unbounded so the crawler never waits for a slow reader.
// The task drops its end of the log channel when it is done, so
// `while let Some(event) = handle.next_log().await` ends on its own.
// =============================================================================

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::crawl::events::{CrawlResult, LogEvent};
use crate::crawl::stack::Crawler;
use crate::crawl::target::CrawlTarget;
use crate::error::{Result, ScanError};

/// A crawl running on its own task
pub struct CrawlHandle {
    logs: mpsc::UnboundedReceiver<LogEvent>,
    result: oneshot::Receiver<CrawlResult>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Crawler {
    /// Spawns a crawl of `target` and returns a handle to follow it
    ///
    /// Must be called from inside a tokio runtime.
    pub fn start(self, target: CrawlTarget) -> CrawlHandle {
        let (log_tx, log_rx) = mpsc::unbounded_channel();
        let (result_tx, result_rx) = oneshot::channel();
        let cancel = CancellationToken::new();

        let token = cancel.clone();
        let task = tokio::spawn(async move {
            let result = self.crawl(&target, &log_tx, &token).await;
            // Nobody waiting for the result is fine
            let _ = result_tx.send(result);
        });

        CrawlHandle {
            logs: log_rx,
            result: result_rx,
            cancel,
            task,
        }
    }
}

impl CrawlHandle {
    /// Next live log event, or None once the run is over and the log drained
    pub async fn next_log(&mut self) -> Option<LogEvent> {
        self.logs.recv().await
    }

    /// Any log events already buffered, without waiting
    pub fn drain_logs(&mut self) -> Vec<LogEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.logs.try_recv() {
            events.push(event);
        }
        events
    }

    /// Asks the run to stop; the result is still delivered
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A clone of the run's cancellation token, e.g. for a Ctrl-C handler
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Waits for the run to end and returns its report
    pub async fn finish(self) -> Result<CrawlResult> {
        let result = self.result.await.map_err(|_| ScanError::RunAborted)?;
        // The task has nothing left to do once it sent the result
        let _ = self.task.await;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;

    #[tokio::test]
    async fn test_handle_streams_logs_then_result() {
        let crawler = Crawler::new(&ScanConfig::default()).unwrap();
        let target = CrawlTarget::new("http://127.0.0.1:1/", 2).unwrap();
        let mut handle = crawler.start(target);

        let mut lines = Vec::new();
        while let Some(event) = handle.next_log().await {
            lines.push(event.to_string());
        }

        let result = handle.finish().await.unwrap();
        assert_eq!(lines, vec!["[*] Crawling: http://127.0.0.1:1/"]);
        assert_eq!(result.total_visited, 1);
    }

    #[tokio::test]
    async fn test_cancel_before_first_poll() {
        let crawler = Crawler::new(&ScanConfig::default()).unwrap();
        let target = CrawlTarget::new("http://127.0.0.1:1/", 2).unwrap();
        // The test runtime is single threaded, so the task has not run yet
        let handle = crawler.start(target);
        handle.cancel();

        let result = handle.finish().await.unwrap();
        assert!(result.cancelled);
        assert_eq!(result.total_visited, 0);
    }

    #[tokio::test]
    async fn test_drain_logs_without_waiting() {
        let crawler = Crawler::new(&ScanConfig::default()).unwrap();
        let target = CrawlTarget::new("http://127.0.0.1:1/", 0).unwrap();
        let mut handle = crawler.start(target);

        let token = handle.cancellation_token();
        assert!(!token.is_cancelled());
        tokio::task::yield_now().await;

        let mut events = Vec::new();
        while events.is_empty() {
            events = handle.drain_logs();
            tokio::task::yield_now().await;
        }
        assert!(matches!(events[0], LogEvent::Crawling { .. }));
        assert!(handle.finish().await.is_ok());
    }
}
