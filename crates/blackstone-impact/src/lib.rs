//! Blackstone Impact Analysis
//!
//! Citation-graph impact traversal and its cross-domain extension.
//!
//! # Overview
//!
//! - [`ImpactAnalyzer`]: depth-first traversal over the external citation
//!   edge store with a traversal-global visited set. Each reachable
//!   document yields exactly one impact chain (first path found wins),
//!   which bounds output size and guarantees termination on cycles.
//! - [`CrossDomainImpactAgent`]: finds impact across domains without an
//!   explicit citation by pairing the corpus-wide vector index with the
//!   impact analyzer, then hands an abstract node/edge description of the
//!   result to the visualization collaborator.
//! - [`ContractReviewMapper`]: maps impacted documents to contracts that
//!   need review, with priorities derived from impact severity.

#![warn(missing_docs)]

pub mod analyzer;
pub mod contracts;
pub mod cross_domain;
pub mod graph;

pub use analyzer::ImpactAnalyzer;
pub use contracts::{ContractRecord, ContractReviewMapper, ContractStore};
pub use cross_domain::{CrossDomainAnalysis, CrossDomainConfig, CrossDomainImpactAgent};
pub use graph::{EdgeKind, ImpactEdge, ImpactGraph, ImpactNode, VisualizationSink};
