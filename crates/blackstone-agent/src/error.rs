//! Error types for the agent substrate

use blackstone_domain::{AnalysisError, AuthorityError, CitationFetchError};
use thiserror::Error;

/// Errors that can occur while an agent processes documents
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    /// The agent is disabled; processing is gated off
    #[error("Agent '{0}' is disabled")]
    Disabled(String),

    /// Authentication or authorization failure (fatal to the call)
    #[error(transparent)]
    Security(#[from] AuthorityError),

    /// Analysis collaborator failure (recorded as a failed result)
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Citation edge store failure
    #[error(transparent)]
    Citation(#[from] CitationFetchError),

    /// The batch queue is gone (agent already cleaned up)
    #[error("Batch queue unavailable: {0}")]
    Queue(String),

    /// Invalid agent configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AgentError {
    /// Whether the caller may retry the failed operation
    pub fn retryable(&self) -> bool {
        match self {
            AgentError::Citation(e) => e.retryable,
            AgentError::Analysis(AnalysisError::InvalidInput(_)) => false,
            AgentError::Analysis(_) => true,
            AgentError::Disabled(_)
            | AgentError::Security(_)
            | AgentError::Queue(_)
            | AgentError::Config(_) => false,
        }
    }
}
