// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Intent matching core of the Xcavate chatbot.
//!
//! Example utterances are loaded from CSV files, grouped by intent, and each
//! incoming message is scored against every example with a fuzzy partial
//! ratio. The best example above the threshold decides the intent; a canned
//! response for that intent is then picked at random.

mod corpus;
mod detector;
mod engine;
mod error;
mod index;
mod selector;
pub mod similarity;

pub use corpus::{
    read_rows, Corpus, CorpusLoader, CorpusRow, EXAMPLE_COLUMN, INTENT_COLUMN, RESPONSE_COLUMN,
};
pub use detector::{Detection, IntentDetector, DEFAULT_THRESHOLD, FALLBACK_INTENT};
pub use engine::{ChatEngine, ChatEngineBuilder, Reply};
pub use error::{LoadError, Result};
pub use index::{Example, IntentIndex};
pub use selector::{
    FirstPicker, ResponsePicker, ResponseSelector, SeededPicker, ThreadRngPicker,
    FALLBACK_RESPONSE,
};
pub use similarity::{partial_ratio, PartialRatio, Score, Similarity};
