use axum::routing::{get, post};
use axum::{Router, middleware};
use std::sync::Arc;

use crate::handlers::{
    click_stats_handler, create_qr_code_handler, delete_qr_code_handler, get_qr_code_handler,
    health_handler, list_qr_codes_handler, metrics_handler, record_click_handler,
    update_qr_code_handler,
};
use crate::middleware::rate_limit_middleware;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    // Only the API routes sit behind the limiter; health and metrics
    // stay reachable for probes
    let api = Router::new()
        .route(
            "/api/qr-codes",
            post(create_qr_code_handler).get(list_qr_codes_handler),
        )
        .route(
            "/api/qr-codes/{id}",
            get(get_qr_code_handler)
                .patch(update_qr_code_handler)
                .delete(delete_qr_code_handler),
        )
        .route("/api/clicks", post(record_click_handler))
        .route("/api/clicks/{id}/stats", get(click_stats_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    Router::new()
        .merge(api)
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}
