//! Built-in checks that exercise normalization and fuzzy matching on the
//! cases the search box depends on. The demo binary prints these, and a
//! host application can surface them in a diagnostics panel.

use std::fmt;

use canonical::normalize;
use matcher::fuzzy_match;
use serde::Serialize;

/// The outcome of one built-in check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfCheck {
    /// Expression under test, e.g. `fuzzy_match("rvi", "ravi")`.
    pub name: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
}

impl SelfCheck {
    fn new(name: String, expected: impl ToString, actual: impl ToString) -> Self {
        let expected = expected.to_string();
        let actual = actual.to_string();
        let passed = expected == actual;
        Self {
            name,
            expected,
            actual,
            passed,
        }
    }

    fn normalize(input: &str, expected: &str) -> Self {
        Self::new(format!("normalize({input:?})"), expected, normalize(input))
    }

    fn fuzzy(query: &str, text: &str, expected: bool) -> Self {
        Self::new(
            format!("fuzzy_match({query:?}, {text:?})"),
            expected,
            fuzzy_match(query, text),
        )
    }
}

impl fmt::Display for SelfCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed {
            write!(f, "PASS: {}", self.name)
        } else {
            write!(
                f,
                "FAIL: {} (expected {}, got {})",
                self.name, self.expected, self.actual
            )
        }
    }
}

/// Runs every built-in check and returns the results in a fixed order.
pub fn run_self_checks() -> Vec<SelfCheck> {
    vec![
        SelfCheck::normalize("José", "jose"),
        SelfCheck::normalize("JOSE", "jose"),
        SelfCheck::fuzzy("rvi", "ravi", true),
        SelfCheck::fuzzy("cse2025-01", "CSE2025-001", true),
        SelfCheck::fuzzy("ana", "arun", false),
        SelfCheck::fuzzy("jose", "José", true),
        SelfCheck::fuzzy("", "test", false),
        SelfCheck::fuzzy("test", "", false),
    ]
}

/// True when every check in `checks` passed.
pub fn all_passed(checks: &[SelfCheck]) -> bool {
    checks.iter().all(|check| check.passed)
}
