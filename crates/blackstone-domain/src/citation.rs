//! Citation module - directed dependency edges between documents

use crate::document::DocumentId;

/// A directed citation edge: `source` cites (and therefore depends on)
/// `target`
///
/// Edges are owned by an external store; this record is the wire shape the
/// engine traverses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitationRelationship {
    /// Citing document
    pub source: DocumentId,

    /// Cited document
    pub target: DocumentId,
}

impl CitationRelationship {
    /// Create a new citation edge
    pub fn new(source: impl Into<DocumentId>, target: impl Into<DocumentId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
