//! Diagnostic counters.
//!
//! Counters are observational only. They never feed back into rewriting
//! decisions and are never reset; a process-wide instance is available from
//! [`Stats::global`], and a [`crate::Rewriter`] may carry its own.

use std::{
    fmt,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicU64, Ordering},
    },
};

static GLOBAL: OnceLock<Arc<Stats>> = OnceLock::new();

/// Running counts of strings processed, strings modified and errors.
#[derive(Debug, Default)]
pub struct Stats {
    processed: AtomicU64,
    modified: AtomicU64,
    errors: AtomicU64,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide counters used by the free functions.
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    pub(crate) fn record_processed(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_modified(&self) {
        self.modified.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Reads the counters.
    ///
    /// The three values are read independently and may be mutually
    /// inconsistent while other threads are rewriting.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            processed: self.processed.load(Ordering::Relaxed),
            modified: self.modified.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }

    /// Emits the current counters as an `info` event.
    ///
    /// Intended to be called from the embedder's own timer for periodic dumps.
    pub fn log_snapshot(&self) {
        let snapshot = self.snapshot();
        tracing::info!(
            processed = snapshot.processed,
            modified = snapshot.modified,
            errors = snapshot.errors,
            "mathdelim stats"
        );
    }
}

/// A point-in-time copy of [`Stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub processed: u64,
    pub modified: u64,
    pub errors: u64,
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed={} modified={} errors={}",
            self.processed, self.modified, self.errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        assert_eq!(Stats::new().snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn counters_accumulate_independently() {
        let stats = Stats::new();
        stats.record_processed();
        stats.record_processed();
        stats.record_modified();
        stats.record_error();
        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                processed: 2,
                modified: 1,
                errors: 1,
            }
        );
    }

    #[test]
    fn global_instance_is_shared() {
        assert!(Arc::ptr_eq(&Stats::global(), &Stats::global()));
    }

    #[test]
    fn snapshot_displays_all_counters() {
        let snapshot = StatsSnapshot {
            processed: 3,
            modified: 2,
            errors: 1,
        };
        assert_eq!(snapshot.to_string(), "processed=3 modified=2 errors=1");
    }
}
