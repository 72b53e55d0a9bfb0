// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Xcavate chatbot REST API contract types
//!
//! Shared between the server and its integration tests so both sides agree
//! on the JSON shapes of `/chat` and the auxiliary endpoints.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;

/// Generate OpenAPI schema for the API contract types
#[cfg(feature = "utoipa")]
pub fn openapi_schema() -> utoipa::openapi::OpenApi {
    use utoipa::OpenApi;
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Xcavate Chatbot API"),
        paths(),
        components(schemas(
            ChatRequest,
            ChatResponse,
            HealthResponse,
            ReadinessResponse,
            VersionResponse,
            ProblemDetails,
        ))
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}

#[cfg(all(test, feature = "utoipa"))]
mod tests {
    use super::*;

    #[test]
    fn schema_lists_chat_types() {
        let schema = openapi_schema();
        let components = schema.components.expect("components");
        for name in ["ChatRequest", "ChatResponse", "ProblemDetails"] {
            assert!(components.schemas.contains_key(name), "missing {name}");
        }
    }
}
