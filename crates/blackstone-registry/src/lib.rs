//! Blackstone Domain Registry
//!
//! CRUD service and read-through cache for named legal domains.
//!
//! # Architecture
//!
//! Two layers:
//!
//! - [`DomainService`]: validated CRUD against the external `DomainStore`
//!   collaborator. Validation runs before any persistence call.
//! - [`DomainRegistry`]: the authoritative in-memory map consumed by
//!   agents. Every write goes through the service and lands in the map;
//!   reads are served from a TTL entry (default 5 minutes) and only fall
//!   back to the backing store when the entry is stale or missing.
//!
//! Registries are explicitly constructed, dependency-injected instances -
//! owned once at process start and passed by reference to consumers.

#![warn(missing_docs)]

pub mod error;
pub mod registry;
pub mod service;

pub use error::RegistryError;
pub use registry::{DomainRegistry, RegistryConfig};
pub use service::DomainService;
