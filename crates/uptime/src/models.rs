use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Website model - represents a monitoring target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    /// Probe cadence in milliseconds
    #[serde(rename = "interval")]
    pub interval_ms: u64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Website {
    /// Create a new website from an already validated request
    pub fn new(new: NewWebsite, default_interval_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: new.name.trim().to_string(),
            url: new.url.trim().to_string(),
            interval_ms: new.interval.unwrap_or(default_interval_ms),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Replace the fields present in `update`
    pub fn apply(&mut self, update: WebsiteUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(url) = update.url {
            self.url = url.trim().to_string();
        }
        if let Some(interval) = update.interval {
            self.interval_ms = interval;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}

/// Registration request
///
/// Missing fields deserialize to empty values so that validation, not the
/// JSON layer, decides what is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewWebsite {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// Milliseconds; the global poll interval when absent
    pub interval: Option<u64>,
}

impl NewWebsite {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), interval: None }
    }
}

/// Partial update; only these fields may be changed
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WebsiteUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub interval: Option<u64>,
    pub is_active: Option<bool>,
}
