//! # Request Gatekeeper
//!
//! Static bearer-token authentication for the case lookup API.
//!
//! ## Header Format
//!
//! ```text
//! Authorization: Bearer {token}
//! ```
//!
//! The scheme is matched literally: `Bearer`, capital B, followed by one
//! space. The token is the text after that space up to the next space, so
//! `Bearer abc extra` presents `abc` and `Bearer  abc` presents an empty
//! token.
//!
//! ## Outcomes
//!
//! | Header                               | Result                        |
//! |--------------------------------------|-------------------------------|
//! | absent                               | [`AuthError::MissingHeader`] (401) |
//! | not starting with `"Bearer "`        | [`AuthError::InvalidScheme`] (401) |
//! | `Bearer` + token ≠ configured secret | [`AuthError::InvalidToken`] (403)  |
//! | `Bearer` + configured secret         | request proceeds              |
//!
//! The secret is compared in constant time and never logged.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;
use thiserror::Error;
use zeroize::Zeroizing;

use crate::error::AppError;

/// Literal prefix of an accepted `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

// ── Secret ──────────────────────────────────────────────────────────────────

/// The configured API secret.
///
/// Zeroized on drop. `Debug` prints `[REDACTED]`.
#[derive(Clone)]
pub struct SecretToken(Zeroizing<String>);

impl SecretToken {
    /// Wrap a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Constant-time comparison against a caller-supplied token.
    pub fn matches(&self, provided: &str) -> bool {
        constant_time_token_eq(provided, &self.0)
    }
}

impl std::fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretToken([REDACTED])")
    }
}

// ── Auth Configuration ──────────────────────────────────────────────────────

/// Auth configuration injected into request extensions when the router is
/// built.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub token: SecretToken,
}

// ── Token Validation ────────────────────────────────────────────────────────

/// Gatekeeper failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("missing authorization header")]
    MissingHeader,

    /// The header does not use the `Bearer ` scheme (or is not readable text).
    #[error("authorization header must use Bearer scheme")]
    InvalidScheme,

    /// The bearer token does not match the configured secret.
    #[error("token not authorized")]
    InvalidToken,
}

/// Constant-time comparison of bearer tokens.
///
/// When lengths differ, performs a dummy comparison so the time taken does
/// not depend on how much of the token matched.
fn constant_time_token_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Check a raw `Authorization` header value against the configured secret.
pub fn authenticate(header: Option<&str>, expected: &SecretToken) -> Result<(), AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let provided = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::InvalidScheme)?
        .split(' ')
        .next()
        .unwrap_or_default();
    if expected.matches(provided) {
        Ok(())
    } else {
        Err(AuthError::InvalidToken)
    }
}

// ── Middleware ───────────────────────────────────────────────────────────────

/// Reject the request unless it carries the configured bearer token.
///
/// Runs before any extractor of the wrapped routes, so authentication is
/// always decided before input validation.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let Some(config) = request.extensions().get::<AuthConfig>().cloned() else {
        tracing::error!("auth middleware installed without AuthConfig extension");
        return AppError::Internal("authentication is not configured".into()).into_response();
    };

    // A header that is not visible ASCII cannot carry the Bearer prefix.
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .map(|v| v.to_str().unwrap_or_default());

    match authenticate(header, &config.token) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::warn!(reason = %err, "authentication failed");
            AppError::from(err).into_response()
        }
    }
}
