//! Blackstone Hierarchy Manager
//!
//! Owns the corpus snapshot and keeps it consistent under the binding
//! authority hierarchy.
//!
//! # Overview
//!
//! - Registration and update run a conflict check against every valid
//!   document of equal or higher authority; a confident conflict soft-
//!   invalidates the candidate
//! - A valid registration or any update cascades invalidation to valid
//!   documents of lower authority that depend on the changed one
//! - Dependency questions go through the pluggable `DependencyResolver`
//!   capability; the production resolver walks the external citation graph
//! - Conflict and invalidation events land in an in-process outbox and are
//!   dispatched to the notification collaborator separately, so delivery
//!   failures never block a mutation
//!
//! # Concurrency
//!
//! The document map is shared mutable state. All mutating operations take
//! `&mut self`, which serializes writers per corpus; cascade reads a
//! snapshot of candidate ids before mutating entries.

#![warn(missing_docs)]

pub mod error;
pub mod manager;
pub mod outbox;
pub mod resolver;

pub use error::HierarchyError;
pub use manager::{HierarchyManager, RegistrationOutcome, DEFAULT_CONFLICT_THRESHOLD};
pub use outbox::{NotificationEvent, NotificationOutbox};
pub use resolver::{CitationDependencyResolver, StaticDependencyResolver};
