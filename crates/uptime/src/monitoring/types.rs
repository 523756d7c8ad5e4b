use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a single probe attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Up,
    Slow,
    Down,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Up => write!(f, "up"),
            CheckStatus::Slow => write!(f, "slow"),
            CheckStatus::Down => write!(f, "down"),
        }
    }
}

/// What a single probe produced, before the history store gives it an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// Probe completion time
    pub timestamp: DateTime<Utc>,

    pub status: CheckStatus,

    /// Wall-clock time from dispatch to response or failure
    pub response_time_ms: u64,
}

impl ProbeOutcome {
    pub fn new(status: CheckStatus, response_time_ms: u64) -> Self {
        Self { timestamp: Utc::now(), status, response_time_ms }
    }
}

/// A retained check result for one website
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub id: Uuid,

    /// UUID of the website that was checked
    pub website_id: Uuid,

    pub timestamp: DateTime<Utc>,

    pub status: CheckStatus,

    #[serde(rename = "responseTime")]
    pub response_time_ms: u64,

    /// Arrival order across every website, used to merge the combined feed
    #[serde(skip)]
    pub(crate) seq: u64,
}

impl Check {
    pub(crate) fn from_outcome(website_id: Uuid, outcome: ProbeOutcome, seq: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            website_id,
            timestamp: outcome.timestamp,
            status: outcome.status,
            response_time_ms: outcome.response_time_ms,
            seq,
        }
    }
}

/// Entry of the combined feed shown by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    pub timestamp: DateTime<Utc>,
    pub status: CheckStatus,
    #[serde(rename = "responseTime")]
    pub response_time_ms: u64,
    pub website_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CheckStatus::Slow).unwrap(), "\"slow\"");
        assert_eq!(CheckStatus::Down.to_string(), "down");
    }

    #[test]
    fn test_check_wire_shape() {
        let website_id = Uuid::new_v4();
        let check =
            Check::from_outcome(website_id, ProbeOutcome::new(CheckStatus::Up, 120), 7);
        let value = serde_json::to_value(&check).unwrap();

        assert_eq!(value["websiteId"], website_id.to_string());
        assert_eq!(value["responseTime"], 120);
        assert_eq!(value["status"], "up");
        assert!(value.get("seq").is_none());
        assert!(value["timestamp"].as_str().unwrap().contains('T'));
    }
}
