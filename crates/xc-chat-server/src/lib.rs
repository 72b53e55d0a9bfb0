// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Xcavate chatbot REST API server
//!
//! Serves `POST /chat` over an intent index that is loaded from CSV corpora
//! once at startup, plus health, readiness, version and OpenAPI endpoints.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::Server;
pub use state::AppState;
