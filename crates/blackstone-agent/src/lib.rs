//! Blackstone Agent Substrate
//!
//! Shared capability set for document-processing agents.
//!
//! # Overview
//!
//! Every concrete agent (the cross-domain impact agent, future document
//! processors) implements the single [`DocumentAgent::process`] operation.
//! The [`AgentRuntime`] wraps it with the capabilities all agents share:
//!
//! - **Enable gate**: a disabled agent rejects every call
//! - **Result cache**: per-document TTL cache with bounded size; eviction
//!   prefers least-hit, then oldest entries
//! - **Batching**: explicit `process_batch` chunks its input and runs the
//!   documents of a chunk concurrently, chunks sequentially; the debounced
//!   queue (`queue_for_batch_processing`) flushes on size-reached or
//!   timeout-elapsed, whichever comes first
//! - **Security gate**: with `require_auth` on, every document-accessing
//!   call carries a caller identity, verified externally and checked
//!   against role/domain allow-lists
//! - **Uniform failure mapping**: per-document failures are recorded
//!   results, never aborts, so batch aggregation counts consistently
//!
//! # Concurrency
//!
//! The queue consumer is a single task owning the pending batch; enqueue
//! and flush are commands on its channel, so a flush in progress cannot be
//! re-triggered by a concurrent enqueue. Call [`AgentRuntime::cleanup`]
//! before disposal to flush queued work and stop the consumer.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod runtime;
pub mod security;

pub use cache::ResultCache;
pub use config::{AgentConfig, BatchConfig, CacheConfig, SecurityConfig};
pub use error::AgentError;
pub use metrics::AgentMetrics;
pub use runtime::{
    AgentRuntime, BatchSummary, DocumentAgent, ProcessingOutcome, ProcessingResult,
};
pub use security::{AllowAll, SecurityGate};
