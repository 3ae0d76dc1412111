use canonical::{normalize_with, NormalizeConfig};

struct Case {
    name: &'static str,
    input: &'static str,
    cfg: NormalizeConfig,
    expected: &'static str,
}

#[test]
fn golden_corpus_regression() {
    let keep_marks = NormalizeConfig {
        strip_marks: false,
        ..Default::default()
    };
    let keep_case = NormalizeConfig {
        lowercase: false,
        ..Default::default()
    };

    let cases = [
        Case {
            name: "ascii_case_fold",
            input: "RAVI Kumar",
            cfg: NormalizeConfig::default(),
            expected: "ravi kumar",
        },
        Case {
            name: "precomposed_acute",
            input: "Jos\u{00E9}",
            cfg: NormalizeConfig::default(),
            expected: "jose",
        },
        Case {
            name: "decomposed_acute",
            input: "Jose\u{0301}",
            cfg: NormalizeConfig::default(),
            expected: "jose",
        },
        Case {
            name: "vietnamese_stacked_marks",
            input: "Nguy\u{1EC5}n",
            cfg: NormalizeConfig::default(),
            expected: "nguyen",
        },
        Case {
            name: "stroke_letters_untouched",
            // Ł and Đ have no decomposition; only case folding applies.
            input: "\u{0141}\u{00F3}d\u{017A} \u{0110}\u{1EE9}c",
            cfg: NormalizeConfig::default(),
            expected: "\u{0142}odz \u{0111}uc",
        },
        Case {
            name: "identifier_passthrough",
            input: "CSE2025-001",
            cfg: NormalizeConfig::default(),
            expected: "cse2025-001",
        },
        Case {
            name: "marks_only",
            input: "\u{0300}\u{0301}\u{0302}",
            cfg: NormalizeConfig::default(),
            expected: "",
        },
        Case {
            name: "keep_marks_lowercases_only",
            input: "JOS\u{00C9}",
            cfg: keep_marks,
            expected: "jos\u{00E9}",
        },
        Case {
            name: "keep_case_strips_only",
            input: "Jos\u{00E9}",
            cfg: keep_case,
            expected: "Jose",
        },
    ];

    for case in cases {
        let out = normalize_with(case.input, &case.cfg)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));
        assert_eq!(out, case.expected, "text mismatch for {}", case.name);
    }
}
