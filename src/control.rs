use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

/// The serializable subset of [`CentralityControl`] — the knobs a caller
/// would plausibly load from a config file rather than construct in code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CentralityConfig {
    /// `0` means "use the engine's default block count", `1` forces the
    /// sequential path, `>1` enables the parallel path when the network is
    /// large enough (`§4.8`).
    pub max_parallel_blocks: usize,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        CentralityConfig {
            max_parallel_blocks: 0,
        }
    }
}

/// Advisory, thread-safe progress and cancellation surface passed into
/// [`crate::algorithms::centrality::betweenness::compute_betweenness_centrality`]
/// and [`crate::algorithms::centrality::stress::compute_stress_centrality`].
///
/// Every field here is written from possibly many worker threads at once
/// (`§4.9`), so the progress counters are atomics and the callback is
/// required to be `Send + Sync`.
pub struct CentralityControl {
    pub max_parallel_blocks: usize,
    pub current_progress: AtomicI64,
    pub max_progress: AtomicI64,
    pub update_callback: Option<Box<dyn Fn(&CentralityControl) + Send + Sync>>,
    pub should_abort: AtomicBool,
    pub context: Option<Box<dyn std::any::Any + Send + Sync>>,
}

impl CentralityControl {
    pub fn new() -> Self {
        CentralityControl {
            max_parallel_blocks: 0,
            current_progress: AtomicI64::new(0),
            max_progress: AtomicI64::new(-1),
            update_callback: None,
            should_abort: AtomicBool::new(false),
            context: None,
        }
    }

    pub fn from_config(config: CentralityConfig) -> Self {
        CentralityControl {
            max_parallel_blocks: config.max_parallel_blocks,
            ..CentralityControl::new()
        }
    }

    pub fn with_update_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&CentralityControl) + Send + Sync + 'static,
    {
        self.update_callback = Some(Box::new(callback));
        self
    }

    /// Called once per source vertex, before that source's SSSP runs.
    /// Advisory: the source in flight always completes regardless of
    /// `should_abort` (`§4.9`, `§7`).
    pub(crate) fn advance(&self) {
        self.current_progress.fetch_add(1, Ordering::Relaxed);
        if let Some(callback) = &self.update_callback {
            callback(self);
        }
    }

    pub(crate) fn reset_progress(&self, max_progress: i64) {
        self.current_progress.store(0, Ordering::Relaxed);
        self.max_progress.store(max_progress, Ordering::Relaxed);
    }

    pub fn should_abort(&self) -> bool {
        self.should_abort.load(Ordering::Relaxed)
    }

    pub fn current_progress(&self) -> i64 {
        self.current_progress.load(Ordering::Relaxed)
    }

    pub fn max_progress(&self) -> i64 {
        self.max_progress.load(Ordering::Relaxed)
    }
}

impl Default for CentralityControl {
    fn default() -> Self {
        CentralityControl::new()
    }
}
