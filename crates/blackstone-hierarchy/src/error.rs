//! Error types for the hierarchy manager

use blackstone_domain::CitationFetchError;
use thiserror::Error;

/// Errors that can occur during hierarchy operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HierarchyError {
    /// Malformed document, rejected before any corpus mutation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No registered document under the given id
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Dependency resolution failed at the citation store
    #[error(transparent)]
    Citation(#[from] CitationFetchError),
}
