use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// Expected store outcomes, all recoverable by the caller. A rate limit
// denial is not represented here - the limiter returns false and the
// middleware answers 429 directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("not_found")]
    NotFound,
    #[error("quota_total_exceeded")]
    QuotaTotalExceeded,
    #[error("quota_active_exceeded")]
    QuotaActiveExceeded,
    #[error("validation_failed: {0}")]
    Validation(String),
}

impl StoreError {
    fn status(&self) -> StatusCode {
        match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::QuotaTotalExceeded | StoreError::QuotaActiveExceeded => {
                StatusCode::FORBIDDEN
            }
            StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    // Stable machine-readable code for the JSON body
    fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound => "not_found",
            StoreError::QuotaTotalExceeded => "quota_total_exceeded",
            StoreError::QuotaActiveExceeded => "quota_active_exceeded",
            StoreError::Validation(_) => "validation_failed",
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.code() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(StoreError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            StoreError::QuotaTotalExceeded.status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            StoreError::QuotaActiveExceeded.status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            StoreError::Validation("url_required".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn error_codes() {
        assert_eq!(StoreError::QuotaActiveExceeded.code(), "quota_active_exceeded");
        assert_eq!(
            StoreError::Validation("url_required".into()).code(),
            "validation_failed"
        );
    }
}
