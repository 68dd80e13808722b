//! Document module - the fundamental unit of the Blackstone corpus

use crate::hierarchy::HierarchyLevel;
use std::fmt;

/// Unique identifier for a legal document
///
/// Documents delivered by the ingestion pipeline arrive with externally
/// assigned identifiers (statute numbers, registry keys), so the id is an
/// opaque string rather than a numeric key. Freshly created documents can
/// ask for a generated UUIDv7 id, which keeps generated ids chronologically
/// sortable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document id from an externally assigned key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh UUIDv7-based document id
    ///
    /// # Examples
    ///
    /// ```
    /// use blackstone_domain::DocumentId;
    ///
    /// let id = DocumentId::generate();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty (never valid for a registered document)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kind of legal instrument a document represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Act of a legislature
    Law,
    /// Secondary regulation
    Regulation,
    /// Policy or guidance document
    Policy,
    /// Individual decision or ruling
    Decision,
    /// Anything else
    Other,
}

impl DocumentKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Law => "law",
            DocumentKind::Regulation => "regulation",
            DocumentKind::Policy => "policy",
            DocumentKind::Decision => "decision",
            DocumentKind::Other => "other",
        }
    }

    /// Parse a kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "law" => Some(DocumentKind::Law),
            "regulation" => Some(DocumentKind::Regulation),
            "policy" => Some(DocumentKind::Policy),
            "decision" => Some(DocumentKind::Decision),
            "other" => Some(DocumentKind::Other),
            _ => None,
        }
    }
}

/// Kind of change that triggered an invalidation or notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Text of an existing document was amended
    Amendment,
    /// A document was repealed / superseded
    Repeal,
    /// A new document entered the corpus
    New,
    /// A binding interpretation changed the reading of a document
    Interpretation,
    /// Anything else
    Other,
}

impl ChangeKind {
    /// Get the change kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Amendment => "amendment",
            ChangeKind::Repeal => "repeal",
            ChangeKind::New => "new",
            ChangeKind::Interpretation => "interpretation",
            ChangeKind::Other => "other",
        }
    }
}

/// A legal document positioned on the binding-authority hierarchy
///
/// The hierarchy manager owns the in-memory snapshot of these records;
/// persisted fields are owned by external storage. Documents are never
/// deleted by the engine, only soft-invalidated (`is_valid = false`).
#[derive(Debug, Clone, PartialEq)]
pub struct LegalDocument {
    /// Unique identifier
    pub id: DocumentId,

    /// Human-readable title
    pub title: String,

    /// Full text body
    pub content: String,

    /// Position on the binding-authority hierarchy
    pub level: HierarchyLevel,

    /// Code of the legal domain this document belongs to
    pub domain: String,

    /// Kind of instrument
    pub kind: DocumentKind,

    /// Last modification time (seconds since Unix epoch)
    pub last_modified: u64,

    /// Whether the document is currently valid
    ///
    /// Set to `false` only by conflict detection at registration/update or
    /// by cascade invalidation; re-registration with revised content is the
    /// only path back to `true`.
    pub is_valid: bool,
}

impl LegalDocument {
    /// Create a new valid document
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: DocumentId,
        title: impl Into<String>,
        content: impl Into<String>,
        level: HierarchyLevel,
        domain: impl Into<String>,
        kind: DocumentKind,
        last_modified: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            level,
            domain: domain.into(),
            kind,
            last_modified,
            is_valid: true,
        }
    }

    /// Check structural validity of the record
    ///
    /// A document with an empty id cannot be registered; the hierarchy
    /// manager rejects it before touching the corpus.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("document id must not be empty".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("document title must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> LegalDocument {
        LegalDocument::new(
            DocumentId::new("act-2024-17"),
            "Data Protection Act",
            "Citizens shall have the right to privacy.",
            HierarchyLevel::OrdinaryLaw,
            "privacy",
            DocumentKind::Law,
            1_700_000_000,
        )
    }

    #[test]
    fn test_generated_id_is_uuid() {
        let id = DocumentId::generate();
        assert_eq!(id.as_str().len(), 36);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_new_document_is_valid() {
        let doc = sample_doc();
        assert!(doc.is_valid);
        assert!(doc.validate().is_ok());
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut doc = sample_doc();
        doc.id = DocumentId::new("");
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut doc = sample_doc();
        doc.title = "   ".to_string();
        assert!(doc.validate().is_err());
    }

    #[test]
    fn test_document_kind_roundtrip() {
        for kind in [
            DocumentKind::Law,
            DocumentKind::Regulation,
            DocumentKind::Policy,
            DocumentKind::Decision,
            DocumentKind::Other,
        ] {
            assert_eq!(DocumentKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(DocumentKind::parse("treaty"), None);
    }
}
