use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use super::plan_from;
use crate::error::StoreError;
use crate::metrics::{QR_CODE_COUNT, REQUEST_TOTAL};
use crate::models::{CreateQrCode, QrCode, UpdateQrCode};
use crate::state::AppState;

pub async fn create_qr_code_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(input): Json<CreateQrCode>,
) -> Result<(StatusCode, Json<QrCode>), StoreError> {
    REQUEST_TOTAL.inc();
    let plan = plan_from(&headers);
    let created = state.qr_codes.create(input, plan)?;
    QR_CODE_COUNT.set(state.qr_codes.len() as f64);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_qr_codes_handler(State(state): State<Arc<AppState>>) -> Json<Vec<QrCode>> {
    REQUEST_TOTAL.inc();
    Json(state.qr_codes.list())
}

pub async fn get_qr_code_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<QrCode>, StoreError> {
    REQUEST_TOTAL.inc();
    state.qr_codes.get(&id).map(Json)
}

pub async fn update_qr_code_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(patch): Json<UpdateQrCode>,
) -> Result<Json<QrCode>, StoreError> {
    REQUEST_TOTAL.inc();
    let plan = plan_from(&headers);
    state.qr_codes.update(&id, patch, plan).map(Json)
}

pub async fn delete_qr_code_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, StoreError> {
    REQUEST_TOTAL.inc();
    state.qr_codes.delete(&id)?;
    QR_CODE_COUNT.set(state.qr_codes.len() as f64);
    Ok(StatusCode::NO_CONTENT)
}
