//! Notification outbox decoupling delivery from hierarchy mutation

use blackstone_domain::traits::NotificationSink;
use blackstone_domain::{ChangeKind, Conflict, DocumentId, NotifyError};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// A conflict or invalidation event awaiting delivery
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    /// A document was registered or updated with conflicts
    Conflict {
        /// The conflicted document
        document: DocumentId,
        /// The full conflicting set
        conflicts: Vec<Conflict>,
    },

    /// A document was invalidated by cascade
    Invalidation {
        /// The invalidated document
        invalidated: DocumentId,
        /// The changed document that caused it
        caused_by: DocumentId,
        /// Kind of change that triggered the cascade
        change: ChangeKind,
    },
}

/// In-process event queue drained to the external notification sink
///
/// Events are recorded synchronously during hierarchy mutation and
/// delivered separately; a failed delivery keeps the event at the head of
/// the queue for the next attempt.
#[derive(Debug, Default)]
pub struct NotificationOutbox {
    pending: VecDeque<NotificationEvent>,
}

impl NotificationOutbox {
    /// Create an empty outbox
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a conflict event
    pub fn record_conflict(&mut self, document: DocumentId, conflicts: Vec<Conflict>) {
        self.pending.push_back(NotificationEvent::Conflict {
            document,
            conflicts,
        });
    }

    /// Record an invalidation event
    pub fn record_invalidation(
        &mut self,
        invalidated: DocumentId,
        caused_by: DocumentId,
        change: ChangeKind,
    ) {
        self.pending.push_back(NotificationEvent::Invalidation {
            invalidated,
            caused_by,
            change,
        });
    }

    /// Number of undelivered events
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether every event has been delivered or drained
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending event, leaving the outbox empty
    pub fn drain(&mut self) -> Vec<NotificationEvent> {
        self.pending.drain(..).collect()
    }

    /// Deliver pending events to the sink, in order
    ///
    /// Stops at the first delivery failure; the failed event (and every
    /// later one) stays queued. Returns the number of events delivered.
    pub async fn dispatch<N: NotificationSink>(
        &mut self,
        sink: &N,
    ) -> Result<usize, NotifyError> {
        let mut delivered = 0;
        while let Some(event) = self.pending.front() {
            let result = match event {
                NotificationEvent::Conflict {
                    document,
                    conflicts,
                } => sink.notify_conflict(document, conflicts).await,
                NotificationEvent::Invalidation {
                    invalidated,
                    caused_by,
                    change,
                } => sink.notify_invalidation(invalidated, caused_by, *change).await,
            };

            match result {
                Ok(()) => {
                    self.pending.pop_front();
                    delivered += 1;
                }
                Err(e) => {
                    warn!(delivered, pending = self.pending.len(), error = %e,
                        "notification dispatch interrupted");
                    return Err(e);
                }
            }
        }
        debug!(delivered, "outbox drained");
        Ok(delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Sink that fails the first `fail_first` deliveries
    #[derive(Default)]
    struct FlakySink {
        fail_first: usize,
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl NotificationSink for FlakySink {
        async fn notify_conflict(
            &self,
            _document: &DocumentId,
            _conflicts: &[Conflict],
        ) -> Result<(), NotifyError> {
            self.attempt()
        }

        async fn notify_invalidation(
            &self,
            _invalidated: &DocumentId,
            _caused_by: &DocumentId,
            _change: ChangeKind,
        ) -> Result<(), NotifyError> {
            self.attempt()
        }
    }

    impl FlakySink {
        fn attempt(&self) -> Result<(), NotifyError> {
            let n = self.attempts.fetch_add(1, Ordering::SeqCst);
            if n < self.fail_first {
                Err(NotifyError("sink unavailable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn sample_events(outbox: &mut NotificationOutbox) {
        outbox.record_invalidation(
            DocumentId::new("decree-1"),
            DocumentId::new("law-1"),
            ChangeKind::Amendment,
        );
        outbox.record_conflict(DocumentId::new("law-2"), Vec::new());
    }

    #[tokio::test]
    async fn test_dispatch_delivers_in_order() {
        let mut outbox = NotificationOutbox::new();
        sample_events(&mut outbox);

        let sink = FlakySink::default();
        let delivered = outbox.dispatch(&sink).await.unwrap();
        assert_eq!(delivered, 2);
        assert!(outbox.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_event_queued() {
        let mut outbox = NotificationOutbox::new();
        sample_events(&mut outbox);

        let sink = FlakySink {
            fail_first: 1,
            ..Default::default()
        };
        assert!(outbox.dispatch(&sink).await.is_err());
        // Nothing was lost: both events still queued.
        assert_eq!(outbox.len(), 2);

        // The next attempt succeeds and drains everything.
        let delivered = outbox.dispatch(&sink).await.unwrap();
        assert_eq!(delivered, 2);
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_drain() {
        let mut outbox = NotificationOutbox::new();
        sample_events(&mut outbox);
        let events = outbox.drain();
        assert_eq!(events.len(), 2);
        assert!(outbox.is_empty());
        assert!(matches!(events[0], NotificationEvent::Invalidation { .. }));
    }
}
