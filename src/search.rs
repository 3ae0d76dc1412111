use std::convert::Infallible;
use std::time::Instant;

use matcher::{MatchConfig, MatchError, classify_with, fuzzy_match};
use tracing::{Level, debug, trace, warn};

use crate::metrics::MetricsSpan;

/// Keeps the items whose searchable fields fuzzy-match `query`.
///
/// `fields` returns the text fields of an item (for a student record, its
/// name and roll number) and may borrow from it; an item is kept when any
/// field matches. A query that is empty or only whitespace keeps every
/// item, like an empty search box. Order is preserved and nothing is ranked.
///
/// ```rust
/// use namefold::search;
///
/// let names = ["José Álvarez", "Ravi Kumar", "Arun Nair"];
/// let hits = search("jose", &names, |name| [*name]);
/// assert_eq!(hits, vec![&"José Álvarez"]);
/// ```
pub fn search<'a, T, F, I>(query: &str, items: &'a [T], fields: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let hits = run(query, items, |query, item| {
        Ok::<_, Infallible>(
            fields(item)
                .into_iter()
                .any(|field| fuzzy_match(query, field)),
        )
    });
    match hits {
        Ok(hits) => hits,
        Err(never) => match never {},
    }
}

/// [`search`] under an explicit [`MatchConfig`].
///
/// Fails only if `cfg` is invalid, before any item is examined.
pub fn search_with<'a, T, F, I>(
    query: &str,
    items: &'a [T],
    fields: F,
    cfg: &MatchConfig,
) -> Result<Vec<&'a T>, MatchError>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if let Err(err) = cfg.validate() {
        warn!(error = %err, "search_invalid_config");
        if let Some(span) = MetricsSpan::start() {
            span.record(items.len(), None);
        }
        return Err(err);
    }

    run(query, items, |query, item| {
        for field in fields(item) {
            if let Some(kind) = classify_with(query, field, cfg)? {
                trace!(kind = kind.as_str(), "search_hit");
                return Ok(true);
            }
        }
        Ok(false)
    })
}

fn run<'a, T, E, P>(query: &str, items: &'a [T], is_hit: P) -> Result<Vec<&'a T>, E>
where
    P: Fn(&str, &'a T) -> Result<bool, E>,
{
    let metrics = MetricsSpan::start();
    let start = Instant::now();
    let span = tracing::span!(
        Level::DEBUG,
        "search.search",
        query_len = query.len(),
        candidates = items.len()
    );
    let _guard = span.enter();

    let hits: Vec<&T> = if query.trim().is_empty() {
        items.iter().collect()
    } else {
        let mut hits = Vec::new();
        for item in items {
            if is_hit(query, item)? {
                hits.push(item);
            }
        }
        hits
    };

    debug!(
        hits = hits.len(),
        elapsed_micros = start.elapsed().as_micros() as u64,
        "search_complete"
    );
    if let Some(metrics) = metrics {
        metrics.record(items.len(), Some(hits.len()));
    }
    Ok(hits)
}
