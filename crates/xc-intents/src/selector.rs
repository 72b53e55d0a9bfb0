// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::index::IntentIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Reply for labels that have no responses in the corpus.
pub const FALLBACK_RESPONSE: &str =
    "I'm not sure how to respond to that yet. Could you rephrase or try something else?";

/// Chooses one of `len` candidate responses.
pub trait ResponsePicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ResponsePicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded RNG shared by all callers.
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ResponsePicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

/// Always the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl ResponsePicker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}

/// Maps a detected intent label to one of its responses.
pub struct ResponseSelector {
    index: Arc<IntentIndex>,
    picker: Arc<dyn ResponsePicker>,
}

impl ResponseSelector {
    pub fn new(index: Arc<IntentIndex>) -> Self {
        Self::with_picker(index, Arc::new(ThreadRngPicker))
    }

    pub fn with_picker(index: Arc<IntentIndex>, picker: Arc<dyn ResponsePicker>) -> Self {
        Self { index, picker }
    }

    /// A response registered for `intent`, or [`FALLBACK_RESPONSE`] when the
    /// label is unknown.
    pub fn respond(&self, intent: &str) -> &str {
        match self.index.get(intent) {
            Some(examples) if !examples.is_empty() => {
                let choice = self.picker.pick(examples.len()).min(examples.len() - 1);
                &examples[choice].response
            }
            _ => FALLBACK_RESPONSE,
        }
    }
}

impl fmt::Debug for ResponseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseSelector")
            .field("intents", &self.index.intent_count())
            .finish_non_exhaustive()
    }
}
