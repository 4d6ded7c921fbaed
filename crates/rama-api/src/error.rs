//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps gatekeeper, validation, and provider errors to HTTP status codes
//! and flat JSON bodies of the form:
//!
//! ```json
//! { "error": "radicado must be exactly 23 characters", "code": "BAD_REQUEST" }
//! ```
//!
//! Internal errors additionally carry `detalle` with the underlying error
//! text. That field is diagnostic output for the operator of the calling
//! integration; it is only ever filled from typed provider errors, which
//! never include credentials.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rama_core::ValidationError;
use rama_provider::ProviderError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::auth::AuthError;

/// Generic message returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code (e.g., "BAD_REQUEST", "UNAUTHORIZED").
    pub code: String,
    /// Underlying failure text, present only for internal errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detalle: Option<String>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed credentials (401).
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Well-formed credentials that do not match (403).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid request input (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Failure while producing the case record (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, "UNAUTHENTICATED"),
            Self::Unauthorized(_) => (StatusCode::FORBIDDEN, "UNAUTHORIZED"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Build the response body for this error.
    fn body(&self) -> ErrorBody {
        let (_, code) = self.status_and_code();
        let (error, detalle) = match self {
            Self::Unauthenticated(msg) | Self::Unauthorized(msg) | Self::BadRequest(msg) => {
                (msg.clone(), None)
            }
            Self::Internal(detail) => (INTERNAL_ERROR_MESSAGE.to_string(), Some(detail.clone())),
        };
        ErrorBody {
            error,
            code: code.to_string(),
            detalle,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();

        // Log internal errors for operator visibility.
        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingHeader | AuthError::InvalidScheme => {
                Self::Unauthenticated(err.to_string())
            }
            AuthError::InvalidToken => Self::Unauthorized(err.to_string()),
        }
    }
}

/// Every provider failure is an internal error from the client's point of view.
impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn unauthenticated_status_code() {
        let err = AppError::Unauthenticated("no header".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(code, "UNAUTHENTICATED");
    }

    #[test]
    fn unauthorized_status_code() {
        let err = AppError::Unauthorized("wrong token".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(code, "UNAUTHORIZED");
    }

    #[test]
    fn bad_request_status_code() {
        let err = AppError::BadRequest("bad radicado".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
    }

    #[test]
    fn internal_status_code() {
        let err = AppError::Internal("provider down".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[test]
    fn validation_errors_become_bad_request_with_verbatim_message() {
        let err = AppError::from(ValidationError::MissingRadicado);
        match &err {
            AppError::BadRequest(msg) => assert_eq!(msg, "missing radicado parameter"),
            other => panic!("expected BadRequest, got: {other:?}"),
        }
        let err = AppError::from(ValidationError::InvalidLength { actual: 3 });
        assert_eq!(err.body().error, "radicado must be exactly 23 characters");
    }

    #[test]
    fn auth_errors_split_between_401_and_403() {
        let (status, _) = AppError::from(AuthError::MissingHeader).status_and_code();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = AppError::from(AuthError::InvalidScheme).status_and_code();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = AppError::from(AuthError::InvalidToken).status_and_code();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn provider_error_becomes_internal() {
        let err = AppError::from(ProviderError::Unavailable {
            provider: "external".into(),
            reason: "not integrated".into(),
        });
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn client_error_body_omits_detalle() {
        let json = serde_json::to_value(AppError::BadRequest("x".into()).body()).unwrap();
        assert_eq!(json["error"], "x");
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("detalle").is_none());
    }

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_bad_request() {
        let (status, body) = response_parts(AppError::BadRequest("malformed".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "malformed");
        assert!(body.detalle.is_none());
    }

    #[tokio::test]
    async fn into_response_internal_carries_generic_message_and_detail() {
        let err = AppError::from(ProviderError::Upstream {
            provider: "external".into(),
            reason: "HTTP 502".into(),
        });
        let (status, body) = response_parts(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
        assert_eq!(body.code, "INTERNAL_ERROR");
        let detalle = body.detalle.expect("internal errors carry detalle");
        assert!(detalle.contains("HTTP 502"), "got: {detalle}");
    }
}
