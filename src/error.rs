/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ResourceIdError / DecodeError を統一的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::resourceids::ResourceIdError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{resource} not found."),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ResourceIdError> for AppError {
    fn from(e: ResourceIdError) -> Self {
        match e {
            // Client supplied a path that does not fit the template
            ResourceIdError::Parse { .. } => {
                AppError::bad_request("INVALID_RESOURCE_ID", e.to_string())
            }

            // Template and typed struct disagree: a programming error, never the client's
            ResourceIdError::SegmentNotSpecified { .. } => {
                tracing::error!(error = %e, "resource id projection failed");
                AppError::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resourceids::ParseError;

    #[test]
    fn parse_errors_are_bad_requests() {
        let err: AppError = ResourceIdError::parsing(
            "/groups/g1",
            ParseError::InsufficientSegments {
                expected: 9,
                actual: 2,
            },
        )
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn projection_errors_are_internal() {
        let err: AppError = ResourceIdError::SegmentNotSpecified {
            resource: "User Id Inference Classification Override",
            segment: "userId",
            parsed_keys: vec![],
        }
        .into();
        assert!(matches!(err, AppError::Internal));
    }
}
