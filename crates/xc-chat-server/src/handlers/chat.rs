// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! The chat endpoint

use crate::{state::AppState, ServerResult};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;
use xc_chat_api_contract::{ChatRequest, ChatResponse, ProblemDetails};

/// Detect the intent of a message and answer with one of its responses
///
/// Scoring runs inline on the worker thread. It is a synchronous scan over
/// an immutable in-memory index with no suspension point, sized for corpora
/// of a few thousand examples. Move it to `tokio::task::spawn_blocking` if
/// the corpus grows enough for a single scan to be felt by other connections.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Detected intent and reply", body = ChatResponse),
        (status = 400, description = "Missing or malformed message", body = ProblemDetails)
    )
)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ServerResult<Json<ChatResponse>> {
    let Json(request) = payload?;

    let reply = state.engine.reply(&request.message, state.config.threshold);
    info!(
        intent = %reply.intent,
        score = reply.score,
        matched = reply.matched,
        "Chat message handled"
    );

    Ok(Json(ChatResponse {
        intent: reply.intent,
        response: reply.response,
    }))
}
