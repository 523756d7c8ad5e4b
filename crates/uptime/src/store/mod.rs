//! In-memory state: the website registry and the check history behind it.
//!
//! Both live under one lock so that deleting a website and purging its
//! history is a single step no reader can observe half-done.

pub mod history;
pub mod registry;

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{NewWebsite, Website, WebsiteUpdate};
use crate::monitoring::stats::{Stats, stats};
use crate::monitoring::types::{Check, FeedEntry, ProbeOutcome};
use crate::{COMBINED_CAP, HISTORY_CAP};

pub use history::HistoryStore;
pub use registry::{Registry, RegistryError};

#[derive(Debug)]
struct State {
    registry: Registry,
    history: HistoryStore,
}

/// Shared store handed to the poll loop and the API layer
#[derive(Debug)]
pub struct MonitorStore {
    state: RwLock<State>,
}

impl MonitorStore {
    pub fn new(default_interval_ms: u64) -> Self {
        Self {
            state: RwLock::new(State {
                registry: Registry::new(default_interval_ms),
                history: HistoryStore::new(HISTORY_CAP, COMBINED_CAP),
            }),
        }
    }

    pub async fn add_website(&self, new: NewWebsite) -> Result<Website, RegistryError> {
        let mut state = self.state.write().await;
        let website = state.registry.add(new)?;
        state.history.init(website.id);

        info!(website_id = %website.id, name = %website.name, url = %website.url, "Website registered");
        Ok(website)
    }

    pub async fn get_website(&self, id: Uuid) -> Option<Website> {
        self.state.read().await.registry.get(id).cloned()
    }

    pub async fn list_websites(&self) -> Vec<Website> {
        self.state.read().await.registry.list().to_vec()
    }

    /// Snapshot of the websites the next sweep should probe
    pub async fn active_websites(&self) -> Vec<Website> {
        self.state.read().await.registry.active().cloned().collect()
    }

    pub async fn update_website(
        &self,
        id: Uuid,
        update: WebsiteUpdate,
    ) -> Result<Website, RegistryError> {
        let website = self.state.write().await.registry.update(id, update)?;
        info!(website_id = %id, "Website updated");
        Ok(website)
    }

    /// Remove a website together with its history
    pub async fn delete_website(&self, id: Uuid) -> Result<Website, RegistryError> {
        let mut state = self.state.write().await;
        let website = state.registry.remove(id)?;
        state.history.purge(id);

        info!(website_id = %id, name = %website.name, "Website deleted");
        Ok(website)
    }

    /// Append a probe outcome to a website's history
    ///
    /// Outcomes for websites deleted while their probe was in flight are
    /// dropped and `None` is returned.
    pub async fn record(&self, website_id: Uuid, outcome: ProbeOutcome) -> Option<Check> {
        let mut state = self.state.write().await;
        if !state.registry.contains(website_id) {
            debug!(website_id = %website_id, "Dropping outcome for removed website");
            return None;
        }
        Some(state.history.append(website_id, outcome))
    }

    /// Last `n` checks of a website, oldest first; empty if unknown
    pub async fn recent_checks(&self, website_id: Uuid, n: usize) -> Vec<Check> {
        self.state.read().await.history.recent(website_id, n)
    }

    /// Checks of a registered website, all retained ones when `limit` is `None`
    pub async fn checks(
        &self,
        website_id: Uuid,
        limit: Option<usize>,
    ) -> Result<Vec<Check>, RegistryError> {
        let state = self.state.read().await;
        if !state.registry.contains(website_id) {
            return Err(RegistryError::NotFound(website_id));
        }
        Ok(state.history.recent(website_id, limit.unwrap_or(usize::MAX)))
    }

    pub async fn website_stats(&self, website_id: Uuid) -> Result<Stats, RegistryError> {
        let checks = self.checks(website_id, None).await?;
        Ok(stats(&checks))
    }

    /// Most recent `n` checks across all websites, oldest first, with names attached
    pub async fn feed(&self, n: usize) -> Vec<FeedEntry> {
        let state = self.state.read().await;
        state
            .history
            .combined(n)
            .into_iter()
            .filter_map(|check| {
                let website = state.registry.get(check.website_id)?;
                Some(FeedEntry {
                    timestamp: check.timestamp,
                    status: check.status,
                    response_time_ms: check.response_time_ms,
                    website_name: website.name.clone(),
                })
            })
            .collect()
    }

    /// Combined checks without names, for statistics over the feed window
    pub async fn combined_checks(&self, n: usize) -> Vec<Check> {
        self.state.read().await.history.combined(n)
    }
}
