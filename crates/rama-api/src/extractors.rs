//! # Request Extraction Helpers
//!
//! Maps Axum extractor rejections to [`AppError::BadRequest`] so every
//! client error uses the same JSON body.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;

use crate::error::AppError;

/// Extract query parameters, mapping deserialization errors to
/// [`AppError::BadRequest`].
///
/// Handlers take `Result<Query<T>, QueryRejection>` and call this first:
/// ```ignore
/// async fn handler(query: Result<Query<T>, QueryRejection>) -> Result<..., AppError> {
///     let params = extract_query(query)?;
///     // use params...
/// }
/// ```
pub fn extract_query<T>(result: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    result
        .map(|Query(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
