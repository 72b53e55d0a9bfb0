// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::index::IntentIndex;
use crate::similarity::{PartialRatio, Score, Similarity};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Label reported when no example scores at or above the threshold.
pub const FALLBACK_INTENT: &str = "fallback";

/// Minimum score an example must reach for its intent to be reported.
pub const DEFAULT_THRESHOLD: Score = 70;

/// Outcome of scanning the index for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection<'a> {
    /// An example reached the threshold.
    Matched { intent: &'a str, score: Score },
    /// Nothing reached the threshold; `best_score` is the highest score seen.
    Fallback { best_score: Score },
}

impl<'a> Detection<'a> {
    /// Detected label, or [`FALLBACK_INTENT`].
    pub fn intent(&self) -> &'a str {
        match self {
            Detection::Matched { intent, .. } => intent,
            Detection::Fallback { .. } => FALLBACK_INTENT,
        }
    }

    pub fn score(&self) -> Score {
        match self {
            Detection::Matched { score, .. } => *score,
            Detection::Fallback { best_score } => *best_score,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Detection::Fallback { .. })
    }
}

/// Brute-force scan of every example phrase in the index.
pub struct IntentDetector {
    index: Arc<IntentIndex>,
    similarity: Arc<dyn Similarity>,
    // Lowercased phrases, aligned with the index buckets.
    phrases: Vec<Vec<String>>,
}

impl IntentDetector {
    pub fn new(index: Arc<IntentIndex>) -> Self {
        Self::with_similarity(index, Arc::new(PartialRatio))
    }

    pub fn with_similarity(index: Arc<IntentIndex>, similarity: Arc<dyn Similarity>) -> Self {
        let phrases = index
            .iter()
            .map(|(_, examples)| {
                examples
                    .iter()
                    .map(|example| example.phrase.to_lowercase())
                    .collect()
            })
            .collect();
        Self {
            index,
            similarity,
            phrases,
        }
    }

    /// Find the intent whose example best matches `input`.
    ///
    /// The first example reaching the highest score wins; later examples with
    /// an equal score do not replace it. The best score must also be at least
    /// `threshold`, otherwise the detection falls back.
    pub fn detect(&self, input: &str, threshold: Score) -> Detection<'_> {
        let input = input.to_lowercase();

        let mut best_intent: Option<&str> = None;
        let mut best_score: Score = 0;
        for ((intent, _), phrases) in self.index.iter().zip(&self.phrases) {
            for phrase in phrases {
                let score = self.similarity.score(phrase, &input);
                if score > best_score {
                    best_intent = Some(intent);
                    best_score = score;
                }
            }
        }

        let detection = match best_intent {
            Some(intent) if best_score >= threshold => Detection::Matched {
                intent,
                score: best_score,
            },
            _ => Detection::Fallback { best_score },
        };
        debug!(
            intent = detection.intent(),
            score = detection.score(),
            threshold,
            "Detected intent"
        );
        detection
    }

    /// [`detect`](Self::detect) at [`DEFAULT_THRESHOLD`].
    pub fn detect_default(&self, input: &str) -> Detection<'_> {
        self.detect(input, DEFAULT_THRESHOLD)
    }

    pub fn index(&self) -> &IntentIndex {
        &self.index
    }
}

impl fmt::Debug for IntentDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentDetector")
            .field("intents", &self.index.intent_count())
            .field("examples", &self.index.example_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusRow;

    fn detector(rows: Vec<CorpusRow>) -> IntentDetector {
        IntentDetector::new(Arc::new(IntentIndex::from_rows(rows)))
    }

    fn greeting_only() -> IntentDetector {
        detector(vec![CorpusRow::new(
            "greeting",
            "hello there",
            "Hi! How can I help?",
        )])
    }

    #[test]
    fn matches_example_embedded_in_longer_input() {
        let detector = greeting_only();
        let detection = detector.detect("hello there, how are you", 70);
        assert_eq!(
            detection,
            Detection::Matched {
                intent: "greeting",
                score: 100
            }
        );
    }

    #[test]
    fn falls_back_below_threshold() {
        let detector = greeting_only();
        let detection = detector.detect("what is the weather", 70);
        assert_eq!(detection, Detection::Fallback { best_score: 67 });
        assert_eq!(detection.intent(), FALLBACK_INTENT);
    }

    #[test]
    fn threshold_is_inclusive() {
        let detector = greeting_only();
        assert!(!detector.detect("what is the weather", 67).is_fallback());
        assert!(detector.detect("what is the weather", 68).is_fallback());
    }

    #[test]
    fn input_and_examples_are_compared_lowercased() {
        let detector = detector(vec![CorpusRow::new("about", "What Is Xcavate", "A platform.")]);
        let detection = detector.detect("WHAT IS XCAVATE?", DEFAULT_THRESHOLD);
        assert_eq!(detection.intent(), "about");
        assert_eq!(detection.score(), 100);
    }

    #[test]
    fn first_seen_example_wins_ties() {
        let detector = detector(vec![
            CorpusRow::new("first", "buy", "1"),
            CorpusRow::new("second", "buy", "2"),
            CorpusRow::new("first", "sell", "3"),
        ]);
        assert_eq!(detector.detect("i want to buy", 70).intent(), "first");

        let detector = self::detector(vec![
            CorpusRow::new("second", "buy", "2"),
            CorpusRow::new("first", "buy", "1"),
        ]);
        assert_eq!(detector.detect("i want to buy", 70).intent(), "second");
    }

    #[test]
    fn strictly_better_score_replaces_earlier_match() {
        let detector = detector(vec![
            CorpusRow::new("tokens", "buy tokens", "Tokens."),
            CorpusRow::new("property", "buy property", "Property."),
        ]);
        let detection = detector.detect("how do i buy property", 70);
        assert_eq!(
            detection,
            Detection::Matched {
                intent: "property",
                score: 100
            }
        );
    }

    #[test]
    fn empty_corpus_always_falls_back() {
        let detector = detector(Vec::new());
        for threshold in [0, 50, 100] {
            assert_eq!(
                detector.detect("anything at all", threshold),
                Detection::Fallback { best_score: 0 }
            );
        }
    }

    #[test]
    fn empty_input_scores_zero() {
        let detector = greeting_only();
        let detection = detector.detect("", 0);
        assert_eq!(detection, Detection::Fallback { best_score: 0 });
    }

    #[test]
    fn default_threshold_is_seventy() {
        let detector = greeting_only();
        assert_eq!(detector.detect_default("hello there, how are you").intent(), "greeting");
        // 67 against "hello there" is below the default.
        assert_eq!(
            detector.detect_default("what is the weather"),
            Detection::Fallback { best_score: 67 }
        );
    }

    #[test]
    fn threshold_above_hundred_always_falls_back() {
        assert!(greeting_only().detect("hello there", 101).is_fallback());
        assert!(!greeting_only().detect("hello there", 100).is_fallback());
    }

    #[test]
    fn custom_similarity_is_used() {
        let index = Arc::new(IntentIndex::from_rows(vec![
            CorpusRow::new("a", "x", "A"),
            CorpusRow::new("b", "yy", "B"),
        ]));
        let by_length = |phrase: &str, _: &str| (phrase.len() * 40) as Score;
        let detector = IntentDetector::with_similarity(index, Arc::new(by_length));
        assert_eq!(
            detector.detect("whatever", 70),
            Detection::Matched {
                intent: "b",
                score: 80
            }
        );
    }
}
