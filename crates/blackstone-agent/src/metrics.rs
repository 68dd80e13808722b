//! Processing metrics for agent monitoring

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters accumulated over an agent's lifetime
///
/// Updated from both direct calls and the queue consumer task, so the
/// counters are atomics; reads are snapshot-consistent enough for
/// monitoring.
#[derive(Debug, Default)]
pub struct AgentMetrics {
    /// Documents processed successfully
    pub processed: AtomicU64,

    /// Documents that failed processing
    pub failed: AtomicU64,

    /// Results served from the cache
    pub cache_hits: AtomicU64,

    /// Queued batches flushed (by size or timeout)
    pub batches_flushed: AtomicU64,
}

impl AgentMetrics {
    /// Record a successful document
    pub fn record_success(&self) {
        self.processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed document
    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache hit
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a queue flush
    pub fn record_flush(&self) {
        self.batches_flushed.fetch_add(1, Ordering::Relaxed);
    }

    /// Documents processed successfully
    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Documents that failed processing
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Results served from the cache
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    /// Queued batches flushed
    pub fn batches_flushed(&self) -> u64 {
        self.batches_flushed.load(Ordering::Relaxed)
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "processed: {}, failed: {}, cache hits: {}, batches flushed: {}",
            self.processed(),
            self.failed(),
            self.cache_hits(),
            self.batches_flushed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = AgentMetrics::default();
        metrics.record_success();
        metrics.record_success();
        metrics.record_failure();
        metrics.record_cache_hit();
        metrics.record_flush();

        assert_eq!(metrics.processed(), 2);
        assert_eq!(metrics.failed(), 1);
        assert_eq!(metrics.cache_hits(), 1);
        assert_eq!(metrics.batches_flushed(), 1);
        assert!(metrics.summary().contains("processed: 2"));
    }
}
