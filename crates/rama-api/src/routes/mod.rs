//! # API Route Modules
//!
//! - `consultar`: case lookup by radicado (`GET /api/consultar`).

pub mod consultar;

use axum::Router;

use crate::state::AppState;

/// Build the router for every authenticated route.
pub fn router() -> Router<AppState> {
    Router::new().merge(consultar::router())
}
