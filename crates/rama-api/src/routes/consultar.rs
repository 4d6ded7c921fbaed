//! # Case Lookup
//!
//! `GET /api/consultar?radicado=<23 chars>`
//!
//! Runs behind the auth middleware, so by the time the handler executes the
//! caller is authenticated. The handler then validates the query and asks
//! the active provider for the record. Provider failures become 500s.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use rama_core::{CaseQuery, CaseRecord};

use crate::error::{AppError, ErrorBody};
use crate::extractors::extract_query;
use crate::state::AppState;

/// Build the case lookup router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/consultar", get(consultar))
}

/// GET /api/consultar: Look up a case by radicado.
#[utoipa::path(
    get,
    path = "/api/consultar",
    params(CaseQuery),
    responses(
        (status = 200, description = "Case record for the radicado", body = CaseRecord),
        (status = 400, description = "Missing radicado or wrong length", body = ErrorBody),
        (status = 401, description = "Missing or malformed Authorization header", body = ErrorBody),
        (status = 403, description = "Bearer token not authorized", body = ErrorBody),
        (status = 500, description = "Case provider failure", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "consultas"
)]
pub async fn consultar(
    State(state): State<AppState>,
    query: Result<Query<CaseQuery>, QueryRejection>,
) -> Result<Json<CaseRecord>, AppError> {
    let query = extract_query(query)?;
    let radicado = query.validate()?;

    let record = state.provider.lookup(&radicado)?;

    tracing::info!(
        radicado = %radicado,
        provider = state.provider.provider_name(),
        "case lookup served"
    );
    Ok(Json(record))
}
