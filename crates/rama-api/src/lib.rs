//! # rama-api: Case Lookup Gateway
//!
//! A small HTTP gateway in front of Rama Judicial case data. Callers present
//! a static bearer secret and a radicado; the gateway validates both and
//! returns the case record produced by the configured provider.
//!
//! ## API Surface
//!
//! | Route                | Auth   | Module                   |
//! |----------------------|--------|--------------------------|
//! | `GET /api/consultar` | Bearer | [`routes::consultar`]    |
//! | `GET /health/*`      | none   | this module              |
//! | `GET /openapi.json`  | none   | [`openapi`]              |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → AuthMiddleware → Handler
//! ```
//!
//! Authentication always runs before query validation: an unauthenticated
//! request with a bad radicado gets 401/403, never 400.

pub mod auth;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes and the OpenAPI document are mounted outside the auth
/// middleware so they remain accessible without credentials.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        token: state.config.api_key.clone(),
    };

    // Authenticated API routes.
    let api = routes::router()
        .layer(from_fn(auth::auth_middleware))
        .layer(axum::Extension(auth_config))
        .with_state(state.clone());

    // Unauthenticated probes and docs.
    let public = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .merge(openapi::router())
        .with_state(state);

    Router::new()
        .merge(public)
        .merge(api)
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
