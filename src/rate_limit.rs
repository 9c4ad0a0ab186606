use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

// Token bucket for one client key
#[derive(Debug, Clone, Copy)]
struct Bucket {
    tokens: u32,
    last_refill: Instant,
}

// Per-key admission limiter. Buckets refill in full once the window has
// elapsed since the last refill; there is no fractional drip between
// windows. Buckets are created lazily and reclaimed by the sweeper once
// idle for more than twice the window.
//
// Keys are not bounded here: a caller spraying unique keys grows the map
// until the sweeper catches up. Known limitation, pinned by a test.
#[derive(Debug)]
pub struct RateLimiter {
    buckets: DashMap<String, Bucket>,
    capacity: u32,
    window: Duration,
}

impl RateLimiter {
    pub fn new(capacity: u32, window: Duration) -> Self {
        Self {
            buckets: DashMap::new(),
            capacity,
            window,
        }
    }

    // Decide whether a request under this key may proceed. Never blocks;
    // a false return means the caller should retry after the window.
    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    // Clock-explicit variant so tests can drive time by hand
    pub fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut entry = self.buckets.entry(key.to_string()).or_insert(Bucket {
            tokens: self.capacity,
            last_refill: now,
        });

        // Window elapsed? Reset to a full bucket
        if now.duration_since(entry.last_refill) > self.window {
            entry.tokens = self.capacity;
            entry.last_refill = now;
        }

        if entry.tokens > 0 {
            entry.tokens -= 1;
            entry.last_refill = now;
            return true;
        }

        // Exhausted - leave the bucket untouched so the refill clock keeps
        // counting from the last allowed request
        false
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn tracked_keys(&self) -> usize {
        self.buckets.len()
    }

    // Drop buckets idle for more than twice the window. Returns how many
    // were removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let before = self.buckets.len();
        let idle_cutoff = self.window * 2;
        self.buckets
            .retain(|_, bucket| now.duration_since(bucket.last_refill) <= idle_cutoff);
        before - self.buckets.len()
    }

    // Spawn the periodic sweep task. The returned handle aborts the task
    // when stopped or dropped, so no timer outlives the limiter's owner.
    pub fn start_sweeper(self: &Arc<Self>, every: Duration) -> SweeperHandle {
        let limiter = Arc::clone(self);
        let task = tokio::spawn(async move {
            let mut ticker = interval(every);
            loop {
                ticker.tick().await;
                let removed = limiter.sweep();
                if removed > 0 {
                    debug!(removed, tracked = limiter.tracked_keys(), "swept idle rate limit buckets");
                }
            }
        });
        SweeperHandle { task }
    }
}

// Owns the background sweep task for the limiter's lifetime
#[derive(Debug)]
pub struct SweeperHandle {
    task: JoinHandle<()>,
}

impl SweeperHandle {
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
