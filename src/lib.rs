pub mod click_store;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod plan;
pub mod qr_store;
pub mod rate_limit;
pub mod router;
pub mod state;

pub use click_store::ClickStore;
pub use error::StoreError;
pub use models::{ClickEvent, ClickStats, CreateQrCode, QrCode, UpdateQrCode};
pub use plan::{PlanClass, PlanLimits, PlanPolicy};
pub use qr_store::QrStore;
pub use rate_limit::{RateLimiter, SweeperHandle};
pub use router::router;
pub use state::AppState;
