mod clicks;
mod health;
mod metrics;
mod qr_codes;

pub use clicks::{click_stats_handler, record_click_handler};
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use qr_codes::{
    create_qr_code_handler, delete_qr_code_handler, get_qr_code_handler, list_qr_codes_handler,
    update_qr_code_handler,
};

use axum::http::HeaderMap;

use crate::plan::PlanClass;

// Plan class travels on the X-User-Type header; anything missing or
// unrecognized is treated as the free tier.
pub(crate) fn plan_from(headers: &HeaderMap) -> PlanClass {
    headers
        .get("x-user-type")
        .and_then(|value| value.to_str().ok())
        .map(PlanClass::parse)
        .unwrap_or(PlanClass::Free)
}
