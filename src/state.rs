use std::sync::Arc;

use crate::click_store::ClickStore;
use crate::config::Args;
use crate::plan::{PlanLimits, PlanPolicy};
use crate::qr_store::QrStore;
use crate::rate_limit::RateLimiter;
use std::time::Duration;

// App's shared state
pub struct AppState {
    pub qr_codes: QrStore,
    pub clicks: ClickStore,
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn from_args(args: &Args) -> Self {
        let policy = PlanPolicy {
            free: PlanLimits {
                max_total: Some(args.free_max_total),
                max_active: Some(args.free_max_active),
            },
            pro: PlanLimits::unbounded(),
        };
        Self {
            qr_codes: QrStore::new(policy),
            clicks: ClickStore::new(),
            limiter: Arc::new(RateLimiter::new(
                args.rate_limit,
                Duration::from_secs(args.rate_window),
            )),
        }
    }
}
