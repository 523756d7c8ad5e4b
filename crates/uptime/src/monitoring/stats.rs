//! Read-only statistics over a slice of check history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::types::{Check, CheckStatus};

/// Snapshot of the most recent check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastCheck {
    pub timestamp: DateTime<Utc>,
    pub status: CheckStatus,
    #[serde(rename = "responseTime")]
    pub response_time_ms: u64,
}

impl LastCheck {
    /// Placeholder reported when there is no history yet
    fn sentinel() -> Self {
        Self { timestamp: Utc::now(), status: CheckStatus::Down, response_time_ms: 0 }
    }
}

impl From<&Check> for LastCheck {
    fn from(check: &Check) -> Self {
        Self {
            timestamp: check.timestamp,
            status: check.status,
            response_time_ms: check.response_time_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_checks: usize,
    /// Share of checks with status exactly `up`; `slow` does not count
    pub uptime_percent: f64,
    /// Mean response time including failed checks
    pub avg_response_ms: f64,
    pub last_check: LastCheck,
}

/// Compute statistics over chronologically ordered checks
pub fn stats(checks: &[Check]) -> Stats {
    let Some(last) = checks.last() else {
        return Stats {
            total_checks: 0,
            uptime_percent: 0.0,
            avg_response_ms: 0.0,
            last_check: LastCheck::sentinel(),
        };
    };

    let total = checks.len();
    let up = checks.iter().filter(|c| c.status == CheckStatus::Up).count();
    let response_sum: u64 = checks.iter().map(|c| c.response_time_ms).sum();

    Stats {
        total_checks: total,
        uptime_percent: up as f64 * 100.0 / total as f64,
        avg_response_ms: response_sum as f64 / total as f64,
        last_check: last.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitoring::types::ProbeOutcome;
    use uuid::Uuid;

    fn history(entries: &[(CheckStatus, u64)]) -> Vec<Check> {
        let website_id = Uuid::new_v4();
        entries
            .iter()
            .enumerate()
            .map(|(seq, &(status, ms))| {
                Check::from_outcome(website_id, ProbeOutcome::new(status, ms), seq as u64)
            })
            .collect()
    }

    #[test]
    fn test_empty_history_reports_sentinel() {
        let stats = stats(&[]);
        assert_eq!(stats.total_checks, 0);
        assert_eq!(stats.uptime_percent, 0.0);
        assert_eq!(stats.avg_response_ms, 0.0);
        assert_eq!(stats.last_check.status, CheckStatus::Down);
        assert_eq!(stats.last_check.response_time_ms, 0);
    }

    #[test]
    fn test_only_up_counts_towards_uptime() {
        let checks = history(&[
            (CheckStatus::Up, 100),
            (CheckStatus::Up, 200),
            (CheckStatus::Down, 300),
            (CheckStatus::Slow, 6_000),
        ]);
        let stats = stats(&checks);

        assert_eq!(stats.total_checks, 4);
        assert_eq!(stats.uptime_percent, 50.0);
        assert_eq!(stats.avg_response_ms, 1_650.0);
        assert_eq!(stats.last_check.status, CheckStatus::Slow);
        assert_eq!(stats.last_check.response_time_ms, 6_000);
    }

    #[test]
    fn test_stats_is_pure() {
        let checks = history(&[(CheckStatus::Up, 10), (CheckStatus::Down, 20)]);
        assert_eq!(stats(&checks), stats(&checks));
    }

    #[test]
    fn test_stats_wire_shape() {
        let value = serde_json::to_value(stats(&history(&[(CheckStatus::Up, 10)]))).unwrap();
        assert_eq!(value["totalChecks"], 1);
        assert_eq!(value["uptimePercent"], 100.0);
        assert_eq!(value["avgResponseMs"], 10.0);
        assert_eq!(value["lastCheck"]["responseTime"], 10);
    }
}
