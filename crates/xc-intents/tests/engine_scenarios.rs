// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use std::fs;
use std::sync::Arc;

use tempfile::tempdir;
use xc_intents::{
    partial_ratio, ChatEngine, Corpus, CorpusLoader, CorpusRow, FirstPicker, IntentDetector,
    IntentIndex, DEFAULT_THRESHOLD, FALLBACK_INTENT, FALLBACK_RESPONSE,
};

const INPUTS: &[&str] = &[
    "hello there, how are you",
    "what is the weather",
    "How do I invest in property?",
    "tell me what xcavate is",
    "i want to buy some tokens",
    "thanks a lot",
    "",
    "zzzz",
];

fn sample_corpus() -> Corpus {
    Corpus::from_rows(vec![
        CorpusRow::new("greeting", "hello there", "Hi! How can I help?"),
        CorpusRow::new("greeting", "good morning", "Good morning!"),
        CorpusRow::new("about", "what is xcavate", "Xcavate tokenises real estate."),
        CorpusRow::new("invest", "how do i invest", "Pick a property and buy tokens."),
        CorpusRow::new("tokens", "buy tokens", "Tokens are sold on the marketplace."),
        CorpusRow::new("thanks", "thank you", "You're welcome!"),
    ])
}

#[test]
fn greeting_scenario_matches() {
    let corpus = Corpus::from_rows(vec![CorpusRow::new(
        "greeting",
        "hello there",
        "Hi! How can I help?",
    )]);
    let engine = ChatEngine::new(&corpus);

    let reply = engine.reply("hello there, how are you", 70);
    assert_eq!(reply.intent, "greeting");
    assert_eq!(reply.response, "Hi! How can I help?");
    assert!(reply.matched);
}

#[test]
fn unrelated_input_falls_back() {
    let corpus = Corpus::from_rows(vec![CorpusRow::new(
        "greeting",
        "hello there",
        "Hi! How can I help?",
    )]);
    let engine = ChatEngine::new(&corpus);

    let reply = engine.reply("what is the weather", 70);
    assert_eq!(reply.intent, FALLBACK_INTENT);
    assert_eq!(reply.response, FALLBACK_RESPONSE);
    assert!(!reply.matched);
}

#[test]
fn detected_labels_always_come_from_the_index() {
    let index = Arc::new(IntentIndex::build(&sample_corpus()));
    let detector = IntentDetector::new(Arc::clone(&index));
    for input in INPUTS {
        for threshold in [0, 30, 70, 100] {
            let intent = detector.detect(input, threshold).intent();
            assert!(
                intent == FALLBACK_INTENT || index.contains(intent),
                "unexpected label {intent:?} for {input:?}"
            );
        }
    }
}

#[test]
fn detection_reports_first_example_with_best_score() {
    let corpus = sample_corpus();
    let index = Arc::new(IntentIndex::build(&corpus));
    let detector = IntentDetector::new(Arc::clone(&index));

    for input in INPUTS {
        let lowered = input.to_lowercase();
        let mut best: Option<(&str, u8)> = None;
        for row in corpus.rows() {
            let score = partial_ratio(&row.example.to_lowercase(), &lowered);
            if score > best.map(|(_, s)| s).unwrap_or(0) {
                best = Some((row.intent.as_str(), score));
            }
        }

        let detection = detector.detect(input, DEFAULT_THRESHOLD);
        match best {
            Some((intent, score)) if score >= DEFAULT_THRESHOLD => {
                assert_eq!(detection.intent(), intent, "input {input:?}");
                assert_eq!(detection.score(), score);
            }
            _ => assert!(detection.is_fallback(), "input {input:?}"),
        }
    }
}

#[test]
fn raising_the_threshold_only_adds_fallbacks() {
    let index = Arc::new(IntentIndex::build(&sample_corpus()));
    let detector = IntentDetector::new(index);

    for input in INPUTS {
        let mut fell_back = false;
        for threshold in 0..=101u8 {
            let detection = detector.detect(input, threshold);
            if fell_back {
                assert!(
                    detection.is_fallback(),
                    "{input:?} matched again at threshold {threshold}"
                );
            }
            fell_back = detection.is_fallback();
        }
        assert!(fell_back, "{input:?} must fall back above 100");
    }
}

#[test]
fn empty_corpus_never_matches() {
    let engine = ChatEngine::new(&Corpus::default());
    for input in INPUTS {
        for threshold in [0, 70, 100] {
            let reply = engine.reply(input, threshold);
            assert_eq!(reply.intent, FALLBACK_INTENT);
            assert_eq!(reply.response, FALLBACK_RESPONSE);
        }
    }
}

#[test]
fn responses_stay_within_the_detected_intent() {
    let engine = ChatEngine::new(&sample_corpus());
    for _ in 0..50 {
        let reply = engine.reply("hello there, how are you", DEFAULT_THRESHOLD);
        assert_eq!(reply.intent, "greeting");
        assert!(
            ["Hi! How can I help?", "Good morning!"].contains(&reply.response.as_str()),
            "foreign response {:?}",
            reply.response
        );
    }
}

#[test]
fn engine_over_loaded_files() {
    let dir = tempdir().unwrap();
    let master = dir.path().join("xcavate_master_chatbot_dataset.csv");
    let market = dir.path().join("realxmarket_chatbot_intents_full.csv");
    fs::write(
        &master,
        "Intent,User Example,Bot Response\n\
         greeting,hello there,Hi! How can I help?\n\
         about,what is xcavate,\"Xcavate is a platform for tokenised real estate, built on Polkadot.\"\n",
    )
    .unwrap();
    fs::write(
        &market,
        "Intent,User Example,Bot Response\n\
         marketplace,where can i buy property tokens,Head over to the RealXMarket marketplace.\n",
    )
    .unwrap();

    let corpus = CorpusLoader::from_sources([&master, &market]).unwrap().into_corpus();
    let engine = ChatEngine::builder(&corpus)
        .picker(Arc::new(FirstPicker))
        .build();

    assert_eq!(engine.index().intent_count(), 3);

    let reply = engine.reply("Where can I buy property tokens?", DEFAULT_THRESHOLD);
    assert_eq!(reply.intent, "marketplace");
    assert_eq!(reply.response, "Head over to the RealXMarket marketplace.");

    let reply = engine.reply("so what is xcavate exactly", DEFAULT_THRESHOLD);
    assert_eq!(reply.intent, "about");
    assert_eq!(
        reply.response,
        "Xcavate is a platform for tokenised real estate, built on Polkadot."
    );
}
