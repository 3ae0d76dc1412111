use namefold::{classify, edit_distance, fuzzy_match, is_stripped_mark, normalize};

const SAMPLES: [&str; 14] = [
    "",
    "a",
    "ana",
    "arun",
    "ravi",
    "rvi",
    "José",
    "JOSE",
    "Jose\u{0301}",
    "CSE2025-001",
    "cse2025-01",
    "Ångström",
    "Nguyễn",
    "\u{0301}\u{0300}",
];

#[test]
fn normalize_is_idempotent() {
    for s in SAMPLES {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "{s:?}");
    }
}

#[test]
fn normalize_is_case_and_accent_insensitive() {
    assert_eq!(normalize("JOSE"), "jose");
    assert_eq!(normalize("jose"), "jose");
    assert_eq!(normalize("José"), "jose");
    assert_eq!(normalize("José"), normalize("JOSÉ"));
}

#[test]
fn normalize_output_is_folded() {
    for s in SAMPLES {
        let out = normalize(s);
        assert!(!out.chars().any(is_stripped_mark), "{s:?} -> {out:?}");
        assert_eq!(out.to_lowercase(), out, "{s:?} -> {out:?}");
    }
}

#[test]
fn distance_is_a_symmetric_premetric() {
    for a in SAMPLES {
        assert_eq!(edit_distance(a, a), 0, "{a:?}");
        assert_eq!(edit_distance("", a), a.chars().count(), "{a:?}");
        for b in SAMPLES {
            assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn distance_obeys_triangle_inequality() {
    for a in SAMPLES {
        for b in SAMPLES {
            for c in SAMPLES {
                assert!(
                    edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c),
                    "{a:?} {b:?} {c:?}"
                );
            }
        }
    }
}

#[test]
fn empty_guard_holds_for_every_sample() {
    for s in SAMPLES {
        assert!(!fuzzy_match("", s), "{s:?}");
        assert!(!fuzzy_match(s, ""), "{s:?}");
    }
}

#[test]
fn non_empty_strings_match_themselves() {
    for s in SAMPLES.into_iter().filter(|s| !s.is_empty()) {
        assert!(fuzzy_match(s, s), "{s:?}");
    }
}

#[test]
fn fuzzy_match_agrees_with_classify() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(fuzzy_match(a, b), classify(a, b).is_some(), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn reference_cases() {
    assert!(fuzzy_match("jose", "José"));
    assert!(fuzzy_match("cse2025-01", "CSE2025-001"));
    assert!(fuzzy_match("rvi", "ravi"));
    assert!(!fuzzy_match("ana", "arun"));
    assert!(!fuzzy_match("", "anything"));
    assert!(!fuzzy_match("anything", ""));
}
