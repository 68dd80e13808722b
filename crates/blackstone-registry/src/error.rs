//! Error types for the domain registry

use blackstone_domain::StoreError;
use thiserror::Error;

/// Errors that can occur in domain service and registry operations
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed domain record, rejected before any persistence call
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No domain registered under the given code
    #[error("Domain not found: {0}")]
    NotFound(String),

    /// Backing store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
