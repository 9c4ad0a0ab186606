use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use crate::error::StoreError;
use crate::metrics::{CLICKS_TOTAL, REQUEST_TOTAL};
use crate::models::{ClickEvent, ClickStats};
use crate::state::AppState;

pub async fn record_click_handler(
    State(state): State<Arc<AppState>>,
    Json(event): Json<ClickEvent>,
) -> StatusCode {
    REQUEST_TOTAL.inc();
    state.clicks.record(event);
    CLICKS_TOTAL.inc();
    StatusCode::ACCEPTED
}

pub async fn click_stats_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ClickStats>, StoreError> {
    REQUEST_TOTAL.inc();
    state.clicks.stats(&id).map(Json)
}
