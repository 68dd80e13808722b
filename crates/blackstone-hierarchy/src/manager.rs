//! Corpus snapshot and consistency enforcement

use crate::error::HierarchyError;
use crate::outbox::NotificationOutbox;
use blackstone_domain::traits::{DependencyResolver, TextAnalyzer};
use blackstone_domain::{
    ChangeKind, Conflict, ConflictReport, DocumentId, HierarchyLevel, LegalDocument,
};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Conflicts above this confidence invalidate the candidate document
pub const DEFAULT_CONFLICT_THRESHOLD: f64 = 0.6;

/// Outcome of registering or updating a document
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationOutcome {
    /// The document the operation ran for
    pub document: DocumentId,

    /// Validity after the conflict check
    pub valid: bool,

    /// Conflicts found against authoritative peers
    pub conflicts: Vec<Conflict>,

    /// Documents invalidated by the triggered cascade
    pub invalidated: Vec<DocumentId>,
}

/// Owner of the corpus snapshot
///
/// Per-document state machine: unregistered, valid, invalid. Invalidity is
/// terminal unless the document is re-registered (or updated) with revised
/// content that no longer conflicts.
///
/// Mutating operations take `&mut self`; a corpus has a single writer, and
/// cascade reads its candidate snapshot before mutating entries.
pub struct HierarchyManager<A: TextAnalyzer, R: DependencyResolver> {
    documents: HashMap<DocumentId, LegalDocument>,
    analyzer: A,
    resolver: R,
    outbox: NotificationOutbox,
    conflict_threshold: f64,
}

impl<A: TextAnalyzer, R: DependencyResolver> HierarchyManager<A, R> {
    /// Create a manager with the default conflict threshold
    pub fn new(analyzer: A, resolver: R) -> Self {
        Self {
            documents: HashMap::new(),
            analyzer,
            resolver,
            outbox: NotificationOutbox::new(),
            conflict_threshold: DEFAULT_CONFLICT_THRESHOLD,
        }
    }

    /// Override the conflict confidence threshold
    pub fn with_conflict_threshold(mut self, threshold: f64) -> Self {
        self.conflict_threshold = threshold;
        self
    }

    /// Register a document (or re-register one under the same id)
    ///
    /// Rejects a malformed document before touching the corpus. A conflict
    /// above the threshold stores the document invalid and records a
    /// conflict event; otherwise the document is stored valid and a cascade
    /// runs with it as the trigger.
    pub async fn add_document(
        &mut self,
        mut document: LegalDocument,
    ) -> Result<RegistrationOutcome, HierarchyError> {
        document.validate().map_err(HierarchyError::Validation)?;

        let report = self.check_conflicts(&document);
        let id = document.id.clone();

        if report.has_conflict_above(self.conflict_threshold) {
            document.is_valid = false;
            self.documents.insert(id.clone(), document);
            info!(document = %id, conflicts = report.conflicts.len(),
                "document registered invalid");
            self.outbox.record_conflict(id.clone(), report.conflicts.clone());
            return Ok(RegistrationOutcome {
                document: id,
                valid: false,
                conflicts: report.conflicts,
                invalidated: Vec::new(),
            });
        }

        document.is_valid = true;
        self.documents.insert(id.clone(), document);
        debug!(document = %id, checked = report.checked, "document registered valid");

        let invalidated = self.cascade_invalidation(&id, ChangeKind::New).await?;
        Ok(RegistrationOutcome {
            document: id,
            valid: true,
            conflicts: report.conflicts,
            invalidated,
        })
    }

    /// Replace a document's content and re-run consistency checks
    ///
    /// Unknown ids are rejected without mutation. The update re-checks
    /// conflicts, sets validity accordingly, and cascades from the updated
    /// document.
    pub async fn update_document(
        &mut self,
        id: &DocumentId,
        new_content: impl Into<String>,
    ) -> Result<RegistrationOutcome, HierarchyError> {
        let mut updated = self
            .documents
            .get(id)
            .cloned()
            .ok_or_else(|| HierarchyError::NotFound(id.to_string()))?;
        updated.content = new_content.into();
        updated.last_modified = now_secs();

        let report = self.check_conflicts(&updated);
        updated.is_valid = !report.has_conflict_above(self.conflict_threshold);
        let valid = updated.is_valid;
        self.documents.insert(id.clone(), updated);

        if !valid {
            info!(document = %id, conflicts = report.conflicts.len(),
                "document invalidated on update");
            self.outbox.record_conflict(id.clone(), report.conflicts.clone());
        }

        let invalidated = self.cascade_invalidation(id, ChangeKind::Amendment).await?;
        Ok(RegistrationOutcome {
            document: id.clone(),
            valid,
            conflicts: report.conflicts,
            invalidated,
        })
    }

    /// Pure read: conflicts between a candidate and its authoritative peers
    ///
    /// The candidate is compared against every valid registered document
    /// whose level is equal or more authoritative; the candidate's own
    /// entry (on re-registration) is skipped.
    pub fn check_conflicts(&self, candidate: &LegalDocument) -> ConflictReport {
        let mut conflicts = Vec::new();
        let mut checked = 0;

        for other in self.documents.values() {
            if other.id == candidate.id || !other.is_valid {
                continue;
            }
            if !other.level.outranks_or_equals(candidate.level) {
                continue;
            }

            checked += 1;
            let analysis = self.analyzer.analyze(&candidate.content, &other.content);
            if analysis.has_conflict {
                conflicts.push(Conflict {
                    first: candidate.id.clone(),
                    second: other.id.clone(),
                    conflict_type: analysis.conflict_type,
                    confidence: analysis.confidence,
                    details: analysis.details,
                });
            }
        }

        conflicts.sort_by(|a, b| a.second.cmp(&b.second));
        ConflictReport {
            document: candidate.id.clone(),
            conflicts,
            checked,
        }
    }

    /// Invalidate valid lower-authority documents depending on the changed
    /// one
    ///
    /// Each invalidated document gets its validity cleared, its timestamp
    /// bumped, and one invalidation event recorded. Resolver failures
    /// propagate with their retry hint.
    pub async fn cascade_invalidation(
        &mut self,
        changed_id: &DocumentId,
        change: ChangeKind,
    ) -> Result<Vec<DocumentId>, HierarchyError> {
        let changed_level = self
            .documents
            .get(changed_id)
            .map(|d| d.level)
            .ok_or_else(|| HierarchyError::NotFound(changed_id.to_string()))?;

        // Snapshot candidates first; mutation happens after resolution.
        let mut candidates: Vec<DocumentId> = self
            .documents
            .values()
            .filter(|d| {
                d.is_valid
                    && d.id != *changed_id
                    && d.level.ordinal() > changed_level.ordinal()
            })
            .map(|d| d.id.clone())
            .collect();
        candidates.sort();

        let mut invalidated = Vec::new();
        for candidate in candidates {
            if !self.resolver.depends_on(&candidate, changed_id).await? {
                continue;
            }
            if let Some(entry) = self.documents.get_mut(&candidate) {
                entry.is_valid = false;
                entry.last_modified = now_secs();
            }
            info!(invalidated = %candidate, caused_by = %changed_id, "cascade invalidation");
            self.outbox
                .record_invalidation(candidate.clone(), changed_id.clone(), change);
            invalidated.push(candidate);
        }

        Ok(invalidated)
    }

    /// Get a registered document
    pub fn get_document(&self, id: &DocumentId) -> Option<&LegalDocument> {
        self.documents.get(id)
    }

    /// All registered documents at the given level
    pub fn documents_at_level(&self, level: HierarchyLevel) -> Vec<&LegalDocument> {
        let mut docs: Vec<&LegalDocument> = self
            .documents
            .values()
            .filter(|d| d.level == level)
            .collect();
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        docs
    }

    /// All currently valid documents
    pub fn valid_documents(&self) -> Vec<&LegalDocument> {
        let mut docs: Vec<&LegalDocument> =
            self.documents.values().filter(|d| d.is_valid).collect();
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        docs
    }

    /// Every registered document, valid or not
    pub fn all_documents(&self) -> Vec<&LegalDocument> {
        let mut docs: Vec<&LegalDocument> = self.documents.values().collect();
        docs.sort_by(|a, b| a.id.cmp(&b.id));
        docs
    }

    /// Simple admissibility check: registered and valid
    ///
    /// Callers needing the reasons use [`HierarchyManager::check_conflicts`].
    pub fn is_admissible(&self, id: &DocumentId) -> bool {
        self.documents.get(id).is_some_and(|d| d.is_valid)
    }

    /// Access the notification outbox (for dispatch and inspection)
    pub fn outbox_mut(&mut self) -> &mut NotificationOutbox {
        &mut self.outbox
    }

    /// Undelivered notification events
    pub fn pending_notifications(&self) -> usize {
        self.outbox.len()
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbox::NotificationEvent;
    use crate::resolver::StaticDependencyResolver;
    use blackstone_domain::traits::{ConflictAnalysis, TextAnalyzer};
    use blackstone_domain::{conflict_confidence, ConflictType, DocumentKind};

    // Analyzer that reports a contradiction when both texts carry the
    // same §-tag, e.g. "§privacy".
    struct TagAnalyzer;

    impl TextAnalyzer for TagAnalyzer {
        fn analyze(&self, candidate: &str, existing: &str) -> ConflictAnalysis {
            let shared = candidate
                .split_whitespace()
                .filter(|w| w.starts_with('§'))
                .any(|tag| existing.split_whitespace().any(|w| w == tag));
            if shared {
                ConflictAnalysis {
                    has_conflict: true,
                    conflict_type: ConflictType::DirectContradiction,
                    confidence: conflict_confidence(1),
                    details: vec!["shared tag".to_string()],
                }
            } else {
                ConflictAnalysis::none()
            }
        }
    }

    fn doc(id: &str, level: HierarchyLevel, content: &str) -> LegalDocument {
        LegalDocument::new(
            DocumentId::new(id),
            format!("Document {}", id),
            content,
            level,
            "general",
            DocumentKind::Law,
            1_700_000_000,
        )
    }

    fn manager() -> HierarchyManager<TagAnalyzer, StaticDependencyResolver> {
        HierarchyManager::new(TagAnalyzer, StaticDependencyResolver::empty())
    }

    fn manager_with_deps(
        edges: &[(&str, &str)],
    ) -> HierarchyManager<TagAnalyzer, StaticDependencyResolver> {
        let resolver = StaticDependencyResolver::new(
            edges
                .iter()
                .map(|(a, b)| (DocumentId::new(*a), DocumentId::new(*b))),
        );
        HierarchyManager::new(TagAnalyzer, resolver)
    }

    #[tokio::test]
    async fn test_rejects_empty_id_without_mutation() {
        let mut manager = manager();
        let mut bad = doc("x", HierarchyLevel::OrdinaryLaw, "text");
        bad.id = DocumentId::new("");

        let result = manager.add_document(bad).await;
        assert!(matches!(result, Err(HierarchyError::Validation(_))));
        assert!(manager.all_documents().is_empty());
        assert_eq!(manager.pending_notifications(), 0);
    }

    #[tokio::test]
    async fn test_lower_document_invalidated_by_conflict() {
        let mut manager = manager();
        manager
            .add_document(doc("c1", HierarchyLevel::Constitution, "§privacy guaranteed"))
            .await
            .unwrap();

        let outcome = manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "§privacy withdrawn"))
            .await
            .unwrap();

        assert!(!outcome.valid);
        assert_eq!(outcome.conflicts.len(), 1);
        assert_eq!(outcome.conflicts[0].second, DocumentId::new("c1"));
        assert!(!manager.is_admissible(&DocumentId::new("l1")));
        assert!(manager.is_admissible(&DocumentId::new("c1")));
    }

    #[tokio::test]
    async fn test_higher_document_survives_and_cascades() {
        // The ordinary law is registered first and depends on the
        // constitution it contradicts.
        let mut manager = manager_with_deps(&[("l1", "c1")]);
        manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "§privacy withdrawn"))
            .await
            .unwrap();

        let outcome = manager
            .add_document(doc("c1", HierarchyLevel::Constitution, "§privacy guaranteed"))
            .await
            .unwrap();

        // The constitution is never compared against lower documents.
        assert!(outcome.valid);
        assert!(outcome.conflicts.is_empty());
        // The dependent lower document was cascaded instead.
        assert_eq!(outcome.invalidated, vec![DocumentId::new("l1")]);
        assert!(!manager.is_admissible(&DocumentId::new("l1")));
    }

    #[tokio::test]
    async fn test_reregistration_is_idempotent() {
        let mut manager = manager_with_deps(&[("d1", "l1")]);
        manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "records kept"))
            .await
            .unwrap();
        let first = manager
            .add_document(doc("d1", HierarchyLevel::GovernmentDecree, "details"))
            .await
            .unwrap();
        assert!(first.valid);

        // Re-registering the unchanged law cascades over d1 exactly once.
        let re_add = manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "records kept"))
            .await
            .unwrap();
        assert!(re_add.valid);
        assert_eq!(re_add.invalidated, vec![DocumentId::new("d1")]);

        // A second unchanged re-registration finds no valid dependents
        // left, so nothing new is invalidated.
        let re_add_again = manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "records kept"))
            .await
            .unwrap();
        assert!(re_add_again.valid);
        assert!(re_add_again.invalidated.is_empty());
    }

    #[tokio::test]
    async fn test_update_revalidates_with_revised_content() {
        let mut manager = manager();
        manager
            .add_document(doc("c1", HierarchyLevel::Constitution, "§privacy guaranteed"))
            .await
            .unwrap();
        manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "§privacy withdrawn"))
            .await
            .unwrap();
        assert!(!manager.is_admissible(&DocumentId::new("l1")));

        let outcome = manager
            .update_document(&DocumentId::new("l1"), "§taxation rules")
            .await
            .unwrap();
        assert!(outcome.valid);
        assert!(manager.is_admissible(&DocumentId::new("l1")));
    }

    #[tokio::test]
    async fn test_update_unknown_document() {
        let mut manager = manager();
        let result = manager
            .update_document(&DocumentId::new("ghost"), "text")
            .await;
        assert!(matches!(result, Err(HierarchyError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_bumps_last_modified() {
        let mut manager = manager();
        manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "original"))
            .await
            .unwrap();

        manager
            .update_document(&DocumentId::new("l1"), "revised")
            .await
            .unwrap();
        let stored = manager.get_document(&DocumentId::new("l1")).unwrap();
        assert_eq!(stored.content, "revised");
        assert!(stored.last_modified > 1_700_000_000);
    }

    #[tokio::test]
    async fn test_cascade_only_touches_lower_dependents() {
        let mut manager = manager_with_deps(&[("d1", "l1"), ("c2", "l1")]);
        manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "base law"))
            .await
            .unwrap();
        manager
            .add_document(doc("d1", HierarchyLevel::GovernmentDecree, "decree"))
            .await
            .unwrap();
        // Higher-authority document that (oddly) depends on the law: a
        // cascade must never touch it.
        manager
            .add_document(doc("c2", HierarchyLevel::Constitution, "charter"))
            .await
            .unwrap();

        let invalidated = manager
            .cascade_invalidation(&DocumentId::new("l1"), ChangeKind::Amendment)
            .await
            .unwrap();
        assert_eq!(invalidated, vec![DocumentId::new("d1")]);
        assert!(manager.is_admissible(&DocumentId::new("c2")));
    }

    #[tokio::test]
    async fn test_conflict_event_recorded_in_outbox() {
        let mut manager = manager();
        manager
            .add_document(doc("c1", HierarchyLevel::Constitution, "§privacy guaranteed"))
            .await
            .unwrap();
        manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "§privacy withdrawn"))
            .await
            .unwrap();

        let events = manager.outbox_mut().drain();
        assert_eq!(events.len(), 1);
        match &events[0] {
            NotificationEvent::Conflict { document, conflicts } => {
                assert_eq!(*document, DocumentId::new("l1"));
                assert_eq!(conflicts[0].second, DocumentId::new("c1"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_level_and_validity_queries() {
        let mut manager = manager();
        manager
            .add_document(doc("c1", HierarchyLevel::Constitution, "§privacy guaranteed"))
            .await
            .unwrap();
        manager
            .add_document(doc("l1", HierarchyLevel::OrdinaryLaw, "§privacy withdrawn"))
            .await
            .unwrap();
        manager
            .add_document(doc("l2", HierarchyLevel::OrdinaryLaw, "unrelated"))
            .await
            .unwrap();

        assert_eq!(manager.documents_at_level(HierarchyLevel::OrdinaryLaw).len(), 2);
        assert_eq!(manager.valid_documents().len(), 2);
        assert_eq!(manager.all_documents().len(), 3);
    }
}
