//! Boundary error types shared by every layer
//!
//! Pure analysis functions never fail on "no conflict" or "no impact" -
//! those are valid zero-result answers. The types here cover infrastructure
//! failures at the collaborator seams, with retry hints where the caller
//! can act on them.

use thiserror::Error;

/// Failure while fetching citation edges from the external edge store
///
/// Carries a retryable flag; the engine itself performs no retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Citation fetch failed: {message}")]
pub struct CitationFetchError {
    /// Description of the failure
    pub message: String,

    /// Whether the caller may retry the operation
    pub retryable: bool,
}

impl CitationFetchError {
    /// A transient failure the caller may retry
    pub fn retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: true,
        }
    }

    /// A permanent failure
    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            retryable: false,
        }
    }
}

/// Failure of an analysis collaborator (embedding, similarity search,
/// visualization)
///
/// Returned inside a failed processing result rather than propagated, so
/// batch aggregation can count it without aborting sibling documents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Embedding generation failed
    #[error("Embedding failed: {0}")]
    Embedding(String),

    /// Similarity search failed
    #[error("Similarity search failed: {0}")]
    Similarity(String),

    /// Visualization collaborator rejected the graph description
    #[error("Visualization failed: {0}")]
    Visualization(String),

    /// Input was unusable (empty content, oversized payload)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Authentication or authorization failure at the agent security gate
///
/// Always fatal to the current call; never retried implicitly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    /// No caller identity was supplied but the agent requires one
    #[error("Caller identity required")]
    MissingIdentity,

    /// The auth collaborator could not verify the identity
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The verified caller lacks a required role or domain
    #[error("Caller not authorized: {0}")]
    Authorization(String),
}

/// Failure of an external persistence store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Store error: {0}")]
pub struct StoreError(
    /// Failure description
    pub String,
);

/// Failure delivering a notification event
///
/// Delivery failures never block hierarchy mutations; the outbox keeps the
/// event queued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Notification delivery failed: {0}")]
pub struct NotifyError(
    /// Failure description
    pub String,
);
