//! Test to verify concurrent queries over a shared lexicon

use librhyme::dictionary::loader;
use librhyme::prelude::*;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

const SAMPLE_DICT: &str = include_str!("data/cmudict-sample.dict");

#[test]
fn test_parallel_queries_match_sequential() {
    let lexicon = Lexicon::from_readers(SAMPLE_DICT.as_bytes(), loader::CMUDICT_PHONES.as_bytes())
        .unwrap();
    let engine = RhymeEngine::new(lexicon);

    let words = ["dog", "do", "dude", "water", "basket", "cat", "strike"];
    let expected: Vec<Vec<HashSet<String>>> = words
        .iter()
        .map(|word| {
            RhymeRule::ALL
                .iter()
                .map(|&rule| engine.rhymes(rule, word, None).unwrap())
                .collect()
        })
        .collect();
    let expected = Arc::new(expected);

    const NUM_READERS: usize = 8;
    let barrier = Arc::new(Barrier::new(NUM_READERS));

    let mut handles = vec![];

    for i in 0..NUM_READERS {
        let engine_clone = engine.clone();
        let barrier_clone = Arc::clone(&barrier);
        let expected_clone = Arc::clone(&expected);

        let handle = thread::spawn(move || {
            // All threads start querying at the same time
            barrier_clone.wait();

            for j in 0..50 {
                let w = (i + j) % words.len();
                for (r, &rule) in RhymeRule::ALL.iter().enumerate() {
                    let results = engine_clone.rhymes(rule, words[w], None).unwrap();
                    assert_eq!(results, expected_clone[w][r], "{} {}", rule, words[w]);
                }
            }
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Clones share one lexicon
    assert_eq!(Arc::strong_count(engine.lexicon()), 1);
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RhymeEngine>();
    assert_send_sync::<Lexicon>();
}
