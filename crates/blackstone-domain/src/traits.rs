//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the engine and its
//! collaborators. Synchronous traits cover pure CPU-bound capabilities;
//! async traits mark the engine's suspension points (citation-edge fetch,
//! embedding and similarity calls, persistence I/O, notification delivery,
//! authority verification).

use crate::citation::CitationRelationship;
use crate::conflict::{Conflict, ConflictType};
use crate::document::{ChangeKind, DocumentId, LegalDocument};
use crate::errors::{
    AnalysisError, AuthorityError, CitationFetchError, NotifyError, StoreError,
};
use crate::legal_domain::LegalDomain;
use async_trait::async_trait;

/// Structured result of comparing two document bodies
///
/// Produced for every comparison; "no conflict" is a normal result, never
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictAnalysis {
    /// Whether any conflict was found
    pub has_conflict: bool,

    /// Kind of conflict (or [`ConflictType::None`])
    pub conflict_type: ConflictType,

    /// Heuristic confidence in [0, 0.95]
    pub confidence: f64,

    /// Evidence details (matched patterns, overlapping terms)
    pub details: Vec<String>,
}

impl ConflictAnalysis {
    /// A "no conflict" result at full confidence
    pub fn none() -> Self {
        Self {
            has_conflict: false,
            conflict_type: ConflictType::None,
            confidence: crate::conflict::MAX_CONFIDENCE,
            details: Vec::new(),
        }
    }
}

/// Capability: compare two document bodies for textual conflict
///
/// Pure and synchronous. The default implementation is a regex heuristic;
/// the trait exists so an NLP or embedding matcher can replace it without
/// touching the hierarchy manager.
pub trait TextAnalyzer {
    /// Compare `candidate` (the new or edited text) against `existing`
    fn analyze(&self, candidate: &str, existing: &str) -> ConflictAnalysis;
}

/// Capability: decide whether one document depends on another
///
/// The production implementation answers via the citation graph; test
/// implementations may use a static edge list. The question is directional:
/// does `dependent` rely on `dependency`.
#[async_trait]
pub trait DependencyResolver {
    /// Whether `dependent` depends (directly or transitively) on
    /// `dependency`
    async fn depends_on(
        &self,
        dependent: &DocumentId,
        dependency: &DocumentId,
    ) -> Result<bool, CitationFetchError>;
}

/// Trait for the external directed citation-edge store
#[async_trait]
pub trait CitationStore {
    /// Fetch the outgoing citation edges of a document
    ///
    /// An unknown document has no outgoing edges; that is an empty result,
    /// not an error.
    async fn outgoing_citations(
        &self,
        id: &DocumentId,
    ) -> Result<Vec<CitationRelationship>, CitationFetchError>;
}

/// Trait for the external embedding collaborator
#[async_trait]
pub trait EmbeddingProvider {
    /// Generate an embedding vector for the given text
    async fn embed(&self, text: &str) -> Result<Vec<f32>, AnalysisError>;

    /// Dimension of the vectors this provider produces
    fn dimension(&self) -> usize;
}

/// A document returned by similarity search, with its score
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarDocument {
    /// The matched document
    pub document: LegalDocument,

    /// Cosine similarity to the query, in [0, 1]
    pub similarity: f64,
}

/// Trait for the external corpus-wide vector index
#[async_trait]
pub trait SimilaritySearch {
    /// Retrieve up to `top_k` documents whose similarity to the query
    /// vector is at least `threshold`, ranked best-first
    async fn search(
        &self,
        embedding: &[f32],
        top_k: usize,
        threshold: f64,
    ) -> Result<Vec<SimilarDocument>, AnalysisError>;
}

/// Trait for external persistence of legal domains
#[async_trait]
pub trait DomainStore {
    /// Insert a new domain; fails if the code already exists
    async fn insert_domain(&self, domain: &LegalDomain) -> Result<(), StoreError>;

    /// Fetch a domain by code
    async fn fetch_domain(&self, code: &str) -> Result<Option<LegalDomain>, StoreError>;

    /// Replace an existing domain; fails if the code is unknown
    async fn update_domain(&self, domain: &LegalDomain) -> Result<(), StoreError>;

    /// List all domains, optionally restricted to active ones
    async fn list_domains(&self, active_only: bool) -> Result<Vec<LegalDomain>, StoreError>;
}

/// Trait for the external notification collaborator
///
/// Implementations deliver to email, ticketing, or whatever the deployment
/// wires up. The hierarchy manager records events in an outbox and drains
/// them through this trait so a slow or failing sink never blocks a
/// mutation.
#[async_trait]
pub trait NotificationSink {
    /// A document was registered or updated with conflicts
    async fn notify_conflict(
        &self,
        document: &DocumentId,
        conflicts: &[Conflict],
    ) -> Result<(), NotifyError>;

    /// A document was invalidated because one it depends on changed
    async fn notify_invalidation(
        &self,
        invalidated: &DocumentId,
        caused_by: &DocumentId,
        change: ChangeKind,
    ) -> Result<(), NotifyError>;
}

/// Identity presented by a caller of a secured agent operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Subject (user or service id)
    pub subject: String,

    /// Opaque credential verified by the authority collaborator
    pub credential: String,
}

/// Verified caller attributes returned by the authority collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerProfile {
    /// Subject the credential was verified for
    pub subject: String,

    /// Roles granted to the caller
    pub roles: Vec<String>,

    /// Domain codes the caller may touch
    pub domains: Vec<String>,
}

/// Trait for the external authentication collaborator
#[async_trait]
pub trait AuthorityVerifier {
    /// Verify a caller identity and return its granted attributes
    async fn verify(&self, identity: &CallerIdentity) -> Result<CallerProfile, AuthorityError>;
}
