// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::corpus::Corpus;
use crate::detector::IntentDetector;
use crate::index::IntentIndex;
use crate::selector::{ResponsePicker, ResponseSelector, ThreadRngPicker};
use crate::similarity::{PartialRatio, Score, Similarity};
use std::sync::Arc;

/// Result of answering one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: String,
    pub response: String,
    pub score: Score,
    pub matched: bool,
}

/// Detector and selector over one shared, immutable index.
#[derive(Debug)]
pub struct ChatEngine {
    index: Arc<IntentIndex>,
    detector: IntentDetector,
    selector: ResponseSelector,
}

impl ChatEngine {
    /// Engine with partial-ratio scoring and uniformly random responses.
    pub fn new(corpus: &Corpus) -> Self {
        Self::builder(corpus).build()
    }

    pub fn builder(corpus: &Corpus) -> ChatEngineBuilder {
        ChatEngineBuilder {
            index: IntentIndex::build(corpus),
            similarity: Arc::new(PartialRatio),
            picker: Arc::new(ThreadRngPicker),
        }
    }

    /// Detect the intent of `message` and pick a response for it.
    pub fn reply(&self, message: &str, threshold: Score) -> Reply {
        let detection = self.detector.detect(message, threshold);
        let intent = detection.intent();
        Reply {
            intent: intent.to_string(),
            response: self.selector.respond(intent).to_string(),
            score: detection.score(),
            matched: !detection.is_fallback(),
        }
    }

    pub fn index(&self) -> &IntentIndex {
        &self.index
    }
}

/// Swaps the scoring or response-choice strategy before building.
pub struct ChatEngineBuilder {
    index: IntentIndex,
    similarity: Arc<dyn Similarity>,
    picker: Arc<dyn ResponsePicker>,
}

impl ChatEngineBuilder {
    pub fn similarity(mut self, similarity: Arc<dyn Similarity>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn picker(mut self, picker: Arc<dyn ResponsePicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn build(self) -> ChatEngine {
        let index = Arc::new(self.index);
        ChatEngine {
            detector: IntentDetector::with_similarity(Arc::clone(&index), self.similarity),
            selector: ResponseSelector::with_picker(Arc::clone(&index), self.picker),
            index,
        }
    }
}
