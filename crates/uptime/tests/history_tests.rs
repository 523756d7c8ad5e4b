//! History retention properties

use uptime::store::HistoryStore;
use uptime::{CheckStatus, HISTORY_CAP, monitoring::ProbeOutcome};
use uuid::Uuid;

#[test]
fn test_recent_keeps_last_min_n_cap_in_insertion_order() {
    for appends in [0usize, 1, 999, 1000, 1001, 2500] {
        let mut store = HistoryStore::new(HISTORY_CAP, HISTORY_CAP);
        let id = Uuid::new_v4();
        for ms in 0..appends as u64 {
            store.append(id, ProbeOutcome::new(CheckStatus::Up, ms));
        }

        let recent = store.recent(id, appends);
        let kept = appends.min(HISTORY_CAP);
        assert_eq!(recent.len(), kept, "after {appends} appends");

        let expected: Vec<u64> = ((appends - kept) as u64..appends as u64).collect();
        let actual: Vec<u64> = recent.iter().map(|c| c.response_time_ms).collect();
        assert_eq!(actual, expected, "after {appends} appends");
    }
}

#[test]
fn test_histories_are_independent_per_website() {
    let mut store = HistoryStore::new(3, 10);
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    for ms in 0..5 {
        store.append(a, ProbeOutcome::new(CheckStatus::Up, ms));
    }
    store.append(b, ProbeOutcome::new(CheckStatus::Down, 99));

    assert_eq!(store.len(a), 3);
    assert_eq!(store.len(b), 1);
    store.purge(a);
    assert_eq!(store.len(a), 0);
    assert_eq!(store.recent(b, 5)[0].response_time_ms, 99);
}
