//! Maps domain errors onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use ecclesia_core::EcclesiaError;

/// A domain error crossing the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub EcclesiaError);

impl From<EcclesiaError> for ApiError {
    fn from(err: EcclesiaError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            EcclesiaError::NotFound { .. } => StatusCode::NOT_FOUND,
            EcclesiaError::Validation { .. } => StatusCode::BAD_REQUEST,
            // The record exists, the caller just has no business seeing it.
            EcclesiaError::TenantMismatch { .. } => StatusCode::FORBIDDEN,
            EcclesiaError::AlreadyExists { .. } | EcclesiaError::Conflict { .. } => {
                StatusCode::CONFLICT
            }
            EcclesiaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "internal error");
        } else {
            tracing::debug!(error = %self.0, status = %status, "request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let cases = [
            (EcclesiaError::not_found("member", "x"), StatusCode::NOT_FOUND),
            (EcclesiaError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                EcclesiaError::TenantMismatch {
                    entity: "member".into(),
                    id: "x".into(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                EcclesiaError::Conflict {
                    entity: "member".into(),
                    reason: "referenced".into(),
                },
                StatusCode::CONFLICT,
            ),
            (
                EcclesiaError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).status(), expected);
        }
    }
}
