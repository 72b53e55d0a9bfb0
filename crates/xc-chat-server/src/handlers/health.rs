// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Health check endpoints

use crate::{state::AppState, ServerResult};
use axum::{extract::State, Json};
use xc_chat_api_contract::{HealthResponse, ReadinessResponse, VersionResponse};

/// Health check endpoint
pub async fn health_check() -> ServerResult<Json<HealthResponse>> {
    let response = HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    Ok(Json(response))
}

/// Readiness check endpoint
///
/// The index is built before the listener is bound, so a running server is
/// always ready. The counts let operators spot an empty or partial corpus.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> ServerResult<Json<ReadinessResponse>> {
    let index = state.engine.index();
    let response = ReadinessResponse {
        status: "ready".to_string(),
        intents: index.intent_count(),
        examples: index.example_count(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };
    Ok(Json(response))
}

/// Version endpoint
pub async fn version() -> ServerResult<Json<VersionResponse>> {
    let response = VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Ok(Json(response))
}
