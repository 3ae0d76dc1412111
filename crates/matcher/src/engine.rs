use canonical::{normalize, normalize_with};

use crate::distance::edit_distance;
use crate::types::{MatchConfig, MatchError, MatchKind, MAX_EDIT_DISTANCE};


/// Returns true if `query` and `text` match under typo and accent tolerance.
///
/// Both sides are folded with [`canonical::normalize`], then the pair matches
/// if the folded strings are equal, if either contains the other, or if they
/// are one edit apart. An empty `query` or `text` never matches.
///
/// The relation is not transitive: "ravi" matches "rav" and "rav" matches
/// "rao", but "ravi" does not match "rao". Callers must not chain matches.
///
/// ```rust
/// use matcher::fuzzy_match;
///
/// assert!(fuzzy_match("jose", "José"));
/// assert!(fuzzy_match("rvi", "ravi"));
/// assert!(!fuzzy_match("ana", "arun"));
/// assert!(!fuzzy_match("", "anything"));
/// ```
pub fn fuzzy_match(query: impl AsRef<str>, text: impl AsRef<str>) -> bool {
    classify(query, text).is_some()
}

/// [`fuzzy_match`] for values that may be absent. `None` never matches.
pub fn fuzzy_match_option(query: Option<&str>, text: Option<&str>) -> bool {
    match (query, text) {
        (Some(query), Some(text)) => fuzzy_match(query, text),
        _ => false,
    }
}

/// Runs the default decision sequence and reports which step matched.
pub fn classify(query: impl AsRef<str>, text: impl AsRef<str>) -> Option<MatchKind> {
    let (query, text) = (query.as_ref(), text.as_ref());
    if query.is_empty() || text.is_empty() {
        return None;
    }
    decide(&normalize(query), &normalize(text), true, MAX_EDIT_DISTANCE)
}

/// Runs the decision sequence under `cfg`.
///
/// The config is validated first; an invalid config is the only error.
pub fn classify_with(
    query: impl AsRef<str>,
    text: impl AsRef<str>,
    cfg: &MatchConfig,
) -> Result<Option<MatchKind>, MatchError> {
    cfg.validate()?;
    let (query, text) = (query.as_ref(), text.as_ref());
    if query.is_empty() || text.is_empty() {
        return Ok(None);
    }
    let query = normalize_with(query, &cfg.normalize)?;
    let text = normalize_with(text, &cfg.normalize)?;
    Ok(decide(
        &query,
        &text,
        cfg.substring_checks,
        cfg.max_edit_distance,
    ))
}

/// Decision sequence over already-folded strings.
fn decide(
    query: &str,
    text: &str,
    substring_checks: bool,
    max_distance: usize,
) -> Option<MatchKind> {
    if query == text {
        return Some(MatchKind::Exact);
    }

    if substring_checks {
        if text.contains(query) {
            return Some(MatchKind::QueryInText);
        }
        // Stored values shorter than the typed query, e.g. a short code
        // found inside a longer phrase.
        if query.contains(text) {
            return Some(MatchKind::TextInQuery);
        }
    }

    within_distance(query, text, max_distance)
        .map(|distance| MatchKind::WithinDistance { distance })
}

fn within_distance(query: &str, text: &str, max_distance: usize) -> Option<usize> {
    if max_distance == 0 {
        // Distance 0 means equal strings, already handled.
        return None;
    }

    // Each edit changes the length by at most one char.
    let (query_len, text_len) = (query.chars().count(), text.chars().count());
    if query_len.abs_diff(text_len) > max_distance {
        return None;
    }

    let distance = edit_distance(query, text);
    (distance <= max_distance).then_some(distance)
}
