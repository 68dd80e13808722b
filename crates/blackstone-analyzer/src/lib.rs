//! Blackstone Conflict Analyzer
//!
//! Pure textual conflict detection between two document bodies.
//!
//! # Overview
//!
//! The analyzer compares a candidate text (the newly added or edited
//! document) against an existing authoritative text in three stages:
//!
//! 1. **Direct contradiction** - polarity-pair patterns (obligation vs
//!    prohibition, permission vs prohibition, entitlement vs denial) tested
//!    in both directions; any hit short-circuits
//! 2. **Scope overlap** - coarse subject/object extraction; intersecting
//!    terms are evidence of overlapping regulatory scope
//! 3. Otherwise a "no conflict" result at full confidence
//!
//! The analysis is synchronous, makes no external calls, and always returns
//! a structured result - "no conflict" is an answer, not an error.
//!
//! The regex heuristic sits behind the `TextAnalyzer` capability trait so a
//! deployment can swap in an NLP or embedding matcher without touching the
//! hierarchy manager.

#![warn(missing_docs)]

pub mod analyzer;
pub mod patterns;
pub mod scope;

pub use analyzer::ConflictAnalyzer;
pub use scope::ScopeProfile;
