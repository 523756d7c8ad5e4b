use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, timeout};
use tracing::{debug, info, warn};

use super::checker::{Checker, HttpChecker};
use super::types::{CheckStatus, ProbeOutcome};

/// Probe executor - runs one check against a URL and classifies it
///
/// Never fails: every transport error and every timeout becomes a `down`
/// outcome carrying the time it took to detect the failure.
pub struct ProbeExecutor {
    checker: Arc<dyn Checker>,
    timeout: Duration,
    threshold_ms: u64,
}

impl ProbeExecutor {
    /// Create an executor backed by a real HTTP client
    pub fn new(timeout_ms: u64, threshold_ms: u64) -> Result<Self> {
        let timeout = Duration::from_millis(timeout_ms);
        Ok(Self::with_checker(Arc::new(HttpChecker::new(timeout)?), timeout, threshold_ms))
    }

    /// Create an executor over any transport
    pub fn with_checker(checker: Arc<dyn Checker>, timeout: Duration, threshold_ms: u64) -> Self {
        Self { checker, timeout, threshold_ms }
    }

    /// Execute a single GET probe against `url`
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        let start = Instant::now();

        // The checker's own client timeout is not trusted to be the hard limit.
        let result = timeout(self.timeout, self.checker.check(url)).await;

        let response_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let status = match result {
            Ok(Ok(status_code)) => {
                let status = classify(response_time_ms, self.threshold_ms);
                if status == CheckStatus::Slow {
                    info!(url, status_code, response_time_ms, "Slow response");
                } else {
                    debug!(url, status_code, response_time_ms, "Probe succeeded");
                }
                status
            }
            Ok(Err(e)) => {
                warn!(url, response_time_ms, error = %e, "Probe failed");
                CheckStatus::Down
            }
            Err(_) => {
                warn!(url, response_time_ms, "Probe timed out");
                CheckStatus::Down
            }
        };

        ProbeOutcome::new(status, response_time_ms)
    }
}

/// Classify a successful response by its response time
pub fn classify(response_time_ms: u64, threshold_ms: u64) -> CheckStatus {
    if response_time_ms > threshold_ms { CheckStatus::Slow } else { CheckStatus::Up }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::anyhow;

    /// Transport that takes a fixed amount of (tokio) time and then answers
    pub(crate) struct DelayedChecker {
        pub delay: Duration,
        pub fail: bool,
    }

    #[async_trait::async_trait]
    impl Checker for DelayedChecker {
        async fn check(&self, _target: &str) -> Result<u16> {
            tokio::time::sleep(self.delay).await;
            if self.fail { Err(anyhow!("connection refused")) } else { Ok(200) }
        }
    }

    fn executor(delay_ms: u64, fail: bool) -> ProbeExecutor {
        ProbeExecutor::with_checker(
            Arc::new(DelayedChecker { delay: Duration::from_millis(delay_ms), fail }),
            Duration::from_millis(10_000),
            5_000,
        )
    }

    #[test]
    fn test_classify_boundary() {
        assert_eq!(classify(0, 5_000), CheckStatus::Up);
        assert_eq!(classify(5_000, 5_000), CheckStatus::Up);
        assert_eq!(classify(5_001, 5_000), CheckStatus::Slow);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_response_is_up() {
        let outcome = executor(100, false).probe("http://example.test").await;
        assert_eq!(outcome.status, CheckStatus::Up);
        assert_eq!(outcome.response_time_ms, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_response_over_threshold_is_slow() {
        let outcome = executor(6_000, false).probe("http://example.test").await;
        assert_eq!(outcome.status, CheckStatus::Slow);
        assert_eq!(outcome.response_time_ms, 6_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_is_down_with_elapsed_time() {
        let outcome = executor(300, true).probe("http://example.test").await;
        assert_eq!(outcome.status, CheckStatus::Down);
        assert_eq!(outcome.response_time_ms, 300);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_probe_is_cut_at_timeout() {
        let outcome = executor(60_000, false).probe("http://example.test").await;
        assert_eq!(outcome.status, CheckStatus::Down);
        assert_eq!(outcome.response_time_ms, 10_000);
    }

    #[tokio::test]
    async fn test_unreachable_url_is_down() {
        let executor = ProbeExecutor::new(2_000, 5_000).unwrap();
        let outcome = executor.probe("http://127.0.0.1:9/").await;
        assert_eq!(outcome.status, CheckStatus::Down);
    }
}
