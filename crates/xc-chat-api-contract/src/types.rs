// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON bodies exchanged over HTTP

use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ChatRequest {
    /// Free text typed by the user
    pub message: String,
}

/// Answer to `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ChatResponse {
    /// Detected intent label, or `fallback`
    pub intent: String,
    /// Text to show the user
    pub response: String,
}

/// Liveness report from `/healthz`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 time of the check
    pub timestamp: String,
}

/// Size of the loaded corpus, reported by `/readyz`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ReadinessResponse {
    pub status: String,
    pub intents: usize,
    pub examples: usize,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct VersionResponse {
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn chat_response_has_exactly_two_fields() {
        let body = ChatResponse {
            intent: "greeting".into(),
            response: "Hi! How can I help?".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"intent": "greeting", "response": "Hi! How can I help?"})
        );
    }

    #[test]
    fn chat_request_ignores_unknown_fields() {
        let req: ChatRequest =
            serde_json::from_value(json!({"message": "hello", "session": 3})).unwrap();
        assert_eq!(req.message, "hello");
    }

    #[test]
    fn chat_request_rejects_non_string_message() {
        assert!(serde_json::from_value::<ChatRequest>(json!({"message": 5})).is_err());
        assert!(serde_json::from_value::<ChatRequest>(json!({})).is_err());
    }
}
