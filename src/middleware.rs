use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::metrics::RATE_LIMITED_TOTAL;
use crate::state::AppState;

// Admission check in front of the API routes. A denial is a normal
// outcome, answered with 429 and a Retry-After of the window.
pub async fn rate_limit_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);

    if !state.limiter.allow(&key) {
        RATE_LIMITED_TOTAL.inc();
        tracing::debug!(%key, "rate limited");
        let retry_after = state.limiter.window().as_secs().to_string();
        return (
            StatusCode::TOO_MANY_REQUESTS,
            [(header::RETRY_AFTER, retry_after)],
            Json(serde_json::json!({ "error": "rate_limit_exceeded" })),
        )
            .into_response();
    }

    next.run(request).await
}

// Client identity for rate limiting: first hop of X-Forwarded-For,
// then X-Real-IP, then the peer address.
fn client_key(request: &Request) -> String {
    let headers = request.headers();

    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
