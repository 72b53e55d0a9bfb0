// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error payloads returned by the API

use std::collections::HashMap;

/// Problem+JSON error response format as per RFC 7807
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub detail: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub errors: HashMap<String, Vec<String>>,
}

impl ProblemDetails {
    pub fn new(problem_type: &str, title: &str, status: u16, detail: impl Into<String>) -> Self {
        Self {
            problem_type: problem_type.to_string(),
            title: title.to_string(),
            status: Some(status),
            detail: detail.into(),
            errors: HashMap::new(),
        }
    }

    /// Attach a per-field validation message.
    pub fn with_field_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.errors.entry(field.to_string()).or_default().push(message.into());
        self
    }
}
