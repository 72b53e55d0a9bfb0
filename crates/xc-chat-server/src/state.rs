// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Server state management

use crate::config::ServerConfig;
use crate::error::ServerResult;
use std::sync::Arc;
use tracing::{info, warn};
use xc_intents::{ChatEngine, CorpusLoader, SeededPicker};

/// Shared server state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Detector and selector over the loaded corpus, immutable after startup
    pub engine: Arc<ChatEngine>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Load the configured corpora and build the engine
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        if config.data_files.is_empty() {
            warn!("No data files configured, every message will get the fallback reply");
        }
        let corpus = CorpusLoader::from_sources(&config.data_files)?.into_corpus();

        let mut builder = ChatEngine::builder(&corpus);
        if let Some(seed) = config.response_seed {
            builder = builder.picker(Arc::new(SeededPicker::new(seed)));
        }
        let engine = builder.build();

        info!(
            sources = corpus.sources().len(),
            intents = engine.index().intent_count(),
            examples = engine.index().example_count(),
            "Intent index built"
        );

        Ok(Self::with_engine(engine, config))
    }

    /// State around an engine built elsewhere (used by tests)
    pub fn with_engine(engine: ChatEngine, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }

    /// Get configuration reference
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
