use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::executor::ProbeExecutor;
use super::types::CheckStatus;
use crate::DEFAULT_MAX_CONCURRENT_PROBES;
use crate::store::MonitorStore;

/// Lifecycle of the poll loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
    Stopped,
}

/// Poll loop - sweeps every active website once per interval
pub struct PollLoop {
    store: Arc<MonitorStore>,
    executor: Arc<ProbeExecutor>,
    interval: Duration,
    max_concurrency: usize,
    state: watch::Sender<SchedulerState>,
}

impl PollLoop {
    pub fn new(store: Arc<MonitorStore>, executor: Arc<ProbeExecutor>, interval: Duration) -> Self {
        let (state, _) = watch::channel(SchedulerState::Idle);
        Self { store, executor, interval, max_concurrency: DEFAULT_MAX_CONCURRENT_PROBES, state }
    }

    /// Cap the number of checks in flight during one sweep (at least 1)
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Check every active website once and record the outcomes
    ///
    /// At most `max_concurrency` websites are checked at once; each check is
    /// bounded by the executor's timeout and records its own outcome, so a
    /// hanging or failing website never holds back the others past that
    /// timeout. Returns the number of outcomes recorded.
    pub async fn run_tick(&self) -> usize {
        let websites = self.store.active_websites().await;

        let checks: Vec<_> = websites.iter().map(|website| async move {
            let outcome = self.executor.probe(&website.url).await;
            let status = outcome.status;
            self.store.record(website.id, outcome).await.map(|_| status)
        }).collect();
        let recorded: Vec<CheckStatus> = stream::iter(checks)
            .buffer_unordered(self.max_concurrency)
            .filter_map(|status| async move { status })
            .collect()
            .await;

        let count = |wanted: CheckStatus| recorded.iter().filter(|&&s| s == wanted).count();
        debug!(
            websites = websites.len(),
            up = count(CheckStatus::Up),
            slow = count(CheckStatus::Slow),
            down = count(CheckStatus::Down),
            "Tick complete"
        );

        recorded.len()
    }

    /// Start the loop on the runtime
    ///
    /// The first sweep runs immediately. A sweep that outlasts the interval
    /// makes the timer skip the missed ticks instead of bunching them up.
    pub fn spawn(self) -> PollHandle {
        let token = CancellationToken::new();
        self.state.send_replace(SchedulerState::Running);
        let state = self.state.subscribe();

        let task = tokio::spawn(self.run(token.clone()));

        PollHandle { token, task, state }
    }

    async fn run(self, token: CancellationToken) {
        let interval_ms = u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX);
        info!(interval_ms, max_concurrency = self.max_concurrency, "Poll loop started");

        let mut timer = interval(self.interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = timer.tick() => {}
            }

            // An in-flight sweep is allowed to settle; checks are bounded by their timeout.
            self.run_tick().await;
        }

        self.state.send_replace(SchedulerState::Stopped);
        info!("Poll loop stopped");
    }
}

/// Handle to a running poll loop
pub struct PollHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
    state: watch::Receiver<SchedulerState>,
}

impl PollHandle {
    pub fn state(&self) -> SchedulerState {
        *self.state.borrow()
    }

    /// Ask the loop to stop after the current sweep
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Stop the loop and wait for it to exit
    pub async fn shutdown(self) {
        self.token.cancel();
        if let Err(e) = self.task.await {
            tracing::error!("Poll loop task failed: {}", e);
        }
    }
}
