//! Concurrency and thread safety tests for Namefold

use std::sync::Arc;
use std::thread;

use namefold::{MatchConfig, classify_with, fuzzy_match, normalize, search};

const NAMES: [&str; 6] = [
    "José Álvarez",
    "Ravi Kumar",
    "Arun Nair",
    "Ana Lucía Pérez",
    "Nguyễn Văn Đức",
    "Zoë Ångström",
];

#[test]
fn concurrent_normalize_is_deterministic() {
    let expected: Vec<String> = NAMES.iter().map(normalize).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for _ in 0..100 {
                    for (name, want) in NAMES.iter().zip(expected.iter()) {
                        assert_eq!(&normalize(name), want);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("normalize thread panicked");
    }
}

#[test]
fn concurrent_fuzzy_match_same_answers() {
    let queries = ["jose", "rvi", "ana", "nguyen", "zoe angstrom", "cse2025-01"];

    let baseline: Vec<Vec<bool>> = queries
        .iter()
        .map(|q| NAMES.iter().map(|n| fuzzy_match(q, n)).collect())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(move || {
                queries
                    .iter()
                    .map(|q| NAMES.iter().map(|n| fuzzy_match(q, n)).collect::<Vec<_>>())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("fuzzy_match thread panicked");
        assert_eq!(result, baseline, "thread {i} disagreed with baseline");
    }
}

#[test]
fn concurrent_classify_with_shared_config() {
    let cfg = Arc::new(MatchConfig::default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cfg = Arc::clone(&cfg);
            thread::spawn(move || {
                let query = if i % 2 == 0 { "jose" } else { "ravi kumr" };
                NAMES
                    .iter()
                    .filter(|name| {
                        classify_with(query, name, &cfg)
                            .expect("valid config")
                            .is_some()
                    })
                    .count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("classify thread panicked"), 1);
    }
}

#[test]
fn concurrent_search_over_shared_roster() {
    let roster: Arc<Vec<String>> = Arc::new(NAMES.iter().map(|s| s.to_string()).collect());

    // `Đ` has no decomposition, so only the stroked spelling finds "Đức".
    let handles: Vec<_> = ["jose", "lucia", "nguyen", "đuc", "duc", ""]
        .into_iter()
        .map(|query| {
            let roster = Arc::clone(&roster);
            thread::spawn(move || search(query, roster.as_slice(), |name| [name.as_str()]).len())
        })
        .collect();

    let counts: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("search thread panicked"))
        .collect();
    assert_eq!(counts, vec![1, 1, 1, 1, 0, NAMES.len()]);
}
