//! Uptime - periodic HTTP probing with bounded in-memory history
//!
//! The crate is split the way data flows through it: targets live in the
//! [`store::Registry`], the [`monitoring::PollLoop`] sweeps them on a fixed
//! interval through the [`monitoring::ProbeExecutor`], outcomes land in the
//! [`store::HistoryStore`] and [`monitoring::stats`] derives summaries from
//! what is retained.

pub mod models;
pub mod monitoring;
pub mod store;
pub mod validation;

pub use models::{NewWebsite, Website, WebsiteUpdate};
pub use monitoring::{Check, CheckStatus, PollLoop, ProbeExecutor, Stats};
pub use store::{MonitorStore, RegistryError};

/// Maximum number of checks retained per website
pub const HISTORY_CAP: usize = 1000;

/// Maximum number of checks in the combined feed across all websites
pub const COMBINED_CAP: usize = 1000;

/// Default poll interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;

/// Default slow-response threshold in milliseconds
pub const DEFAULT_THRESHOLD_MS: u64 = 5_000;

/// Default probe timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Default number of probes in flight during one sweep
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 16;

/// Shortest accepted probe interval in milliseconds
pub const MIN_INTERVAL_MS: u64 = 1_000;
