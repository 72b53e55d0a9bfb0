// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! OpenAPI specification endpoint

use crate::ServerResult;
use axum::response::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(title = "Xcavate Chatbot API"), paths(super::chat::chat))]
struct ApiDoc;

/// Paths from the handler annotations plus the contract schemas
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(xc_chat_api_contract::openapi_schema());
    doc
}

/// OpenAPI specification endpoint
pub async fn openapi_spec() -> ServerResult<Json<utoipa::openapi::OpenApi>> {
    Ok(Json(api_doc()))
}
