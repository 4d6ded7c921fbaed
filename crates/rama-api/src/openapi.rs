//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI document,
//! served unauthenticated at `/openapi.json`. Assistant platforms import
//! this document to register the lookup as a bearer-authenticated action.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Adds the Bearer token security scheme to the document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Static API key sent as `Authorization: Bearer <key>`. Set via API_KEY env var.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Assembled OpenAPI document for the gateway.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Consulta Rama Judicial",
        description = "Case lookup by radicado (23-character case number).\n\nAuthentication: `Authorization: Bearer <key>`. Health probes and this document are unauthenticated."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::consultar::consultar,
    ),
    components(
        schemas(
            rama_core::CaseRecord,
            rama_core::LastAction,
            crate::error::ErrorBody,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "consultas", description = "Case lookups against the configured provider"),
    ),
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI document.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_lookup_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/consultar"));
    }

    #[test]
    fn document_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn document_registers_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        for name in ["CaseRecord", "LastAction", "ErrorBody"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }

    #[test]
    fn document_serializes() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(json["info"]["title"], "Consulta Rama Judicial");
        assert!(json["paths"]["/api/consultar"]["get"].is_object());
    }
}
