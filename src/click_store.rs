use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::models::{ClickEvent, ClickStats};

// Event log plus the per-QR-code rollup, kept behind one lock so the
// append and the stats update can never be observed apart.
#[derive(Debug, Default)]
struct ClickState {
    events: Vec<ClickEvent>,
    stats: HashMap<String, ClickStats>,
}

// Append-and-summarize store for click events. Records are never
// mutated or deleted individually; retention is not this store's job.
#[derive(Debug, Default)]
pub struct ClickStore {
    state: RwLock<ClickState>,
}

impl ClickStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Append an event and fold it into the subject's rolling stats. The
    // last-seen fields follow the newest timestamp; on a tie the later
    // write wins.
    pub fn record(&self, event: ClickEvent) {
        let mut state = self.state.write().expect("click store lock poisoned");

        match state.stats.get_mut(&event.qr_code_id) {
            Some(stats) => {
                stats.total += 1;
                if event.at >= stats.last_at {
                    stats.last_country = event.country.clone();
                    stats.last_at = event.at;
                }
            }
            None => {
                state.stats.insert(
                    event.qr_code_id.clone(),
                    ClickStats {
                        total: 1,
                        last_country: event.country.clone(),
                        last_at: event.at,
                    },
                );
            }
        }
        state.events.push(event);
    }

    // NotFound is a distinct state here: a QR code with no recorded
    // clicks has no stats, not zero stats.
    pub fn stats(&self, qr_code_id: &str) -> Result<ClickStats, StoreError> {
        let state = self.state.read().expect("click store lock poisoned");
        state
            .stats
            .get(qr_code_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    pub fn recorded_events(&self) -> usize {
        self.state.read().expect("click store lock poisoned").events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(id: &str, secs: i64, country: &str) -> ClickEvent {
        ClickEvent {
            qr_code_id: id.to_string(),
            at: Utc.timestamp_opt(secs, 0).unwrap(),
            country: country.to_string(),
        }
    }

    #[test]
    fn stats_absent_until_first_record() {
        let store = ClickStore::new();
        assert_eq!(store.stats("abc"), Err(StoreError::NotFound));

        store.record(event("abc", 1_700_000_000, "US"));

        let stats = store.stats("abc").unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.last_country, "US");
        assert_eq!(stats.last_at, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
    }

    #[test]
    fn newest_timestamp_wins_the_last_fields() {
        let store = ClickStore::new();
        store.record(event("abc", 100, "US"));
        store.record(event("abc", 300, "DE"));
        // Older event still counts toward the total but does not move
        // the last-seen fields backwards
        store.record(event("abc", 200, "FR"));

        let stats = store.stats("abc").unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.last_country, "DE");
        assert_eq!(stats.last_at, Utc.timestamp_opt(300, 0).unwrap());
    }

    #[test]
    fn equal_timestamps_take_the_later_write() {
        let store = ClickStore::new();
        store.record(event("abc", 100, "US"));
        store.record(event("abc", 100, "BR"));

        let stats = store.stats("abc").unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.last_country, "BR");
    }

    #[test]
    fn subjects_are_tracked_independently() {
        let store = ClickStore::new();
        store.record(event("a", 100, "US"));
        store.record(event("b", 200, "JP"));
        store.record(event("a", 300, "CA"));

        assert_eq!(store.stats("a").unwrap().total, 2);
        assert_eq!(store.stats("a").unwrap().last_country, "CA");
        assert_eq!(store.stats("b").unwrap().total, 1);
        assert_eq!(store.stats("c"), Err(StoreError::NotFound));
        assert_eq!(store.recorded_events(), 3);
    }

    #[test]
    fn concurrent_records_keep_totals_exact() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(ClickStore::new());
        let mut handles = Vec::new();

        for t in 0..8 {
            let store = Arc::clone(&store);
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    store.record(event("hot", (t * 50 + i) as i64, "US"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.stats("hot").unwrap().total, 400);
        assert_eq!(store.recorded_events(), 400);
    }
}
