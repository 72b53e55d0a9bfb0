// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::corpus::{Corpus, CorpusRow};
use std::collections::HashMap;

/// An example utterance and the response it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub phrase: String,
    pub response: String,
}

#[derive(Debug, Clone)]
struct IntentBucket {
    intent: String,
    examples: Vec<Example>,
}

/// Corpus rows grouped by intent label.
///
/// Buckets iterate in the order their label first appeared in the corpus, and
/// examples inside a bucket keep their row order. Detection tie-breaking
/// depends on both orders.
#[derive(Debug, Clone, Default)]
pub struct IntentIndex {
    buckets: Vec<IntentBucket>,
    positions: HashMap<String, usize>,
}

impl IntentIndex {
    pub fn build(corpus: &Corpus) -> Self {
        Self::from_rows(corpus.rows().iter().cloned())
    }

    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = CorpusRow>,
    {
        let mut index = Self::default();
        for row in rows {
            let position = match index.positions.get(&row.intent) {
                Some(&position) => position,
                None => {
                    index.buckets.push(IntentBucket {
                        intent: row.intent.clone(),
                        examples: Vec::new(),
                    });
                    let position = index.buckets.len() - 1;
                    index.positions.insert(row.intent, position);
                    position
                }
            };
            index.buckets[position].examples.push(Example {
                phrase: row.example,
                response: row.response,
            });
        }
        index
    }

    /// Examples registered for `intent`, if the label is known.
    pub fn get(&self, intent: &str) -> Option<&[Example]> {
        self.positions
            .get(intent)
            .map(|&position| self.buckets[position].examples.as_slice())
    }

    pub fn contains(&self, intent: &str) -> bool {
        self.positions.contains_key(intent)
    }

    /// Buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Example])> + '_ {
        self.buckets
            .iter()
            .map(|bucket| (bucket.intent.as_str(), bucket.examples.as_slice()))
    }

    pub fn intents(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().map(|bucket| bucket.intent.as_str())
    }

    pub fn intent_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn example_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.examples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
