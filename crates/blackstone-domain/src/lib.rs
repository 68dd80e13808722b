//! Blackstone Domain Layer
//!
//! This crate contains the core model for the Blackstone legal corpus
//! engine. It defines the fundamental concepts, value objects, and trait
//! interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **LegalDocument**: a document in the corpus, positioned on the binding
//!   authority hierarchy and soft-invalidated when it conflicts with a more
//!   authoritative peer
//! - **HierarchyLevel**: total order over legal instrument types; lower
//!   ordinal = higher binding authority
//! - **Conflict**: a detected textual contradiction or scope overlap between
//!   two documents, with heuristic confidence in [0, 0.95]
//! - **ImpactChain**: a citation-graph path from a changed document to a
//!   transitively affected one, classified by path length
//! - **LegalDomain**: a named regulatory domain with document types,
//!   processing rules, and compliance deadlines
//!
//! ## Architecture
//!
//! - Pure model and trait seams only
//! - Infrastructure implementations live in other crates
//! - Collaborator boundaries (citation edges, similarity search, domain
//!   persistence, notification, authority verification) are trait
//!   definitions here, implemented elsewhere or supplied by the host

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod conflict;
pub mod contract;
pub mod document;
pub mod errors;
pub mod hierarchy;
pub mod impact;
pub mod legal_domain;
pub mod traits;

// Re-exports for convenience
pub use citation::CitationRelationship;
pub use conflict::{conflict_confidence, Conflict, ConflictReport, ConflictType};
pub use contract::{ContractKind, ContractReview, ReviewPriority};
pub use document::{ChangeKind, DocumentId, DocumentKind, LegalDocument};
pub use errors::{
    AnalysisError, AuthorityError, CitationFetchError, NotifyError, StoreError,
};
pub use hierarchy::HierarchyLevel;
pub use impact::{CrossDomainImpact, ImpactChain, ImpactLevel, ImpactSeverity};
pub use legal_domain::{ComplianceRequirement, DeadlineKind, LegalDomain, ProcessingRule};
