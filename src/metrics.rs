// Metrics hooks for collection search.
//
// Callers install a global `SearchMetrics` implementation via
// [`set_search_metrics`]; every call to `search`/`search_with` then reports
// its latency and candidate/hit counts. No metrics backend is linked here.
use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

/// Metrics observer for search operations.
pub trait SearchMetrics: Send + Sync {
    /// Record the outcome of one search.
    ///
    /// `candidates` is the number of items scanned and `hits` the number
    /// kept. `hits` is `None` when the search failed on an invalid config.
    fn record_search(&self, latency: Duration, candidates: usize, hits: Option<usize>);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global search metrics recorder.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

/// Times one search when a recorder is installed.
pub(crate) struct MetricsSpan {
    recorder: Arc<dyn SearchMetrics>,
    start: Instant,
}

impl MetricsSpan {
    pub(crate) fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    pub(crate) fn record(self, candidates: usize, hits: Option<usize>) {
        self.recorder
            .record_search(self.start.elapsed(), candidates, hits);
    }
}
