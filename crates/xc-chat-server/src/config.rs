// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Server configuration

use crate::error::{ServerError, ServerResult};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use xc_intents::{Score, DEFAULT_THRESHOLD};

/// Corpus files read when none are configured
pub const DEFAULT_DATA_FILES: [&str; 2] = [
    "xcavate_master_chatbot_dataset.csv",
    "realxmarket_chatbot_intents_full.csv",
];

/// Server configuration
///
/// Every field is optional in the TOML file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,

    /// CSV corpora, loaded in order
    pub data_files: Vec<PathBuf>,

    /// Minimum partial-ratio score for a match
    pub threshold: Score,

    /// Allow cross-origin requests from any origin
    pub enable_cors: bool,

    /// Seed for reproducible response choice
    pub response_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            data_files: DEFAULT_DATA_FILES.iter().map(PathBuf::from).collect(),
            threshold: DEFAULT_THRESHOLD,
            enable_cors: true,
            response_seed: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> ServerResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            ServerError::Config(format!("cannot read {}: {err}", path.display()))
        })?;
        Self::from_toml(&contents)
            .map_err(|err| ServerError::Config(format!("{}: {err}", path.display())))
    }

    pub fn from_toml(contents: &str) -> ServerResult<Self> {
        toml::from_str(contents).map_err(|err| ServerError::Config(err.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ServerResult<()> {
        if self.threshold > 100 {
            return Err(ServerError::Config(format!(
                "threshold must be between 0 and 100, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}
