use std::sync::Arc;

use uptime::MonitorStore;

/// Shared handles for request handlers
pub struct AppState {
    pub store: Arc<MonitorStore>,
    /// Number of entries served by the combined feed
    pub feed_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<MonitorStore>, feed_limit: usize) -> Self {
        Self { store, feed_limit }
    }
}
