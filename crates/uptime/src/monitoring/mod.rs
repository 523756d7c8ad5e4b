/// Monitoring engine module - probes websites and summarises results
///
/// This module is responsible for:
/// - Performing HTTP checks against a website
/// - Classifying each attempt as up, slow or down
/// - Driving the periodic sweep over all active websites
/// - Computing statistics over retained history
pub mod checker;
pub mod executor;
pub mod scheduler;
pub mod stats;
pub mod types;

pub use checker::{Checker, HttpChecker};
pub use executor::ProbeExecutor;
pub use scheduler::{PollHandle, PollLoop, SchedulerState};
pub use stats::{LastCheck, Stats, stats};
pub use types::{Check, CheckStatus, FeedEntry, ProbeOutcome};
