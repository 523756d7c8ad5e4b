//! Bounded per-website check history.

use std::collections::{HashMap, VecDeque};

use uuid::Uuid;

use crate::monitoring::types::{Check, ProbeOutcome};

/// Append-only log of checks per website with oldest-first eviction
#[derive(Debug)]
pub struct HistoryStore {
    histories: HashMap<Uuid, VecDeque<Check>>,
    cap: usize,
    combined_cap: usize,
    next_seq: u64,
}

impl HistoryStore {
    pub fn new(cap: usize, combined_cap: usize) -> Self {
        Self { histories: HashMap::new(), cap: cap.max(1), combined_cap, next_seq: 0 }
    }

    /// Start an empty history for a newly registered website
    pub fn init(&mut self, website_id: Uuid) {
        self.histories.entry(website_id).or_default();
    }

    /// Give `outcome` an identity, append it and evict from the head past the cap
    pub fn append(&mut self, website_id: Uuid, outcome: ProbeOutcome) -> Check {
        let check = Check::from_outcome(website_id, outcome, self.next_seq);
        self.next_seq += 1;

        let history = self.histories.entry(website_id).or_default();
        history.push_back(check.clone());
        while history.len() > self.cap {
            history.pop_front();
        }

        check
    }

    /// Last `min(n, len)` checks, oldest first; empty for unknown websites
    pub fn recent(&self, website_id: Uuid, n: usize) -> Vec<Check> {
        self.histories
            .get(&website_id)
            .map(|history| {
                let skip = history.len().saturating_sub(n);
                history.iter().skip(skip).cloned().collect()
            })
            .unwrap_or_default()
    }

    /// Number of checks retained for a website
    pub fn len(&self, website_id: Uuid) -> usize {
        self.histories.get(&website_id).map_or(0, VecDeque::len)
    }

    /// Drop the whole history of a website
    pub fn purge(&mut self, website_id: Uuid) -> bool {
        self.histories.remove(&website_id).is_some()
    }

    /// Most recent checks across every website in arrival order
    ///
    /// Bounded by the combined cap and then by `n`.
    pub fn combined(&self, n: usize) -> Vec<Check> {
        let limit = n.min(self.combined_cap);

        // Only the tail of each history can make it into the merged tail.
        let mut merged: Vec<Check> = self
            .histories
            .values()
            .flat_map(|history| history.iter().skip(history.len().saturating_sub(limit)))
            .cloned()
            .collect();
        merged.sort_unstable_by_key(|check| check.seq);

        let skip = merged.len().saturating_sub(limit);
        merged.split_off(skip)
    }
}
