use std::borrow::Cow;
use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::CanonicalError;

/// The Combining Diacritical Marks block removed after decomposition.
const STRIPPED_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Returns true if `ch` is dropped by mark stripping.
pub fn is_stripped_mark(ch: char) -> bool {
    STRIPPED_MARKS.contains(&ch)
}

/// Folds text for comparison: lowercase, NFD, combining marks removed.
///
/// Empty input yields an empty string. This never fails; it is
/// [`normalize_with`] under [`NormalizeConfig::default`].
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("José"), "jose");
/// assert_eq!(normalize("JOSE"), "jose");
/// assert_eq!(normalize("CSE2025-001"), "cse2025-001");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: impl AsRef<str>) -> String {
    fold(input.as_ref(), true, true)
}

/// [`normalize`] for values that may be absent. `None` folds to `""`.
pub fn normalize_option(input: Option<&str>) -> String {
    input.map(|text| normalize(text)).unwrap_or_default()
}

/// Folds text according to `cfg`.
///
/// Returns [`CanonicalError::InvalidConfig`] for a version 0 config. Apart
/// from that, every input (including the empty string) is accepted.
pub fn normalize_with(
    input: impl AsRef<str>,
    cfg: &NormalizeConfig,
) -> Result<String, CanonicalError> {
    cfg.validate()?;
    Ok(fold(input.as_ref(), cfg.lowercase, cfg.strip_marks))
}

fn fold(input: &str, lowercase: bool, strip_marks: bool) -> String {
    if input.is_empty() {
        return String::new();
    }

    // ASCII has no case expansions and nothing to decompose.
    if input.is_ascii() {
        return if lowercase {
            input.to_ascii_lowercase()
        } else {
            input.to_string()
        };
    }

    // Lowercasing runs first: some uppercase letters lower to a base letter
    // plus a combining mark (U+0130 → "i\u{0307}") which must be stripped too.
    let lowered: Cow<str> = if lowercase {
        Cow::Owned(input.to_lowercase())
    } else {
        Cow::Borrowed(input)
    };

    if !strip_marks {
        return lowered.into_owned();
    }

    let mut out = String::with_capacity(lowered.len());
    out.extend(lowered.nfd().filter(|ch| !is_stripped_mark(*ch)));
    out
}
