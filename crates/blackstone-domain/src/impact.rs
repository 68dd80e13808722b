//! Impact module - citation-graph impact chains and cross-domain impact

use crate::document::DocumentId;

/// Classification of an impact chain by citation distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactLevel {
    /// One citation hop from the root
    Direct,

    /// Two or three hops
    Indirect,

    /// More than three hops
    Potential,
}

impl ImpactLevel {
    /// Classify by path length (number of documents between root and the
    /// affected one, inclusive of the root)
    pub fn from_path_len(len: usize) -> Self {
        match len {
            0 | 1 => ImpactLevel::Direct,
            2 | 3 => ImpactLevel::Indirect,
            _ => ImpactLevel::Potential,
        }
    }

    /// Get the impact level as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Direct => "direct",
            ImpactLevel::Indirect => "indirect",
            ImpactLevel::Potential => "potential",
        }
    }
}

/// Severity bucket for downstream triage
///
/// Derived from the citation distance and the computed risk score; used by
/// contract review mapping to set priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImpactSeverity {
    /// Remote, low-risk impact
    Low,
    /// Worth scheduling a review
    Medium,
    /// Needs prompt attention
    High,
    /// Directly affected with high risk
    Critical,
}

impl ImpactSeverity {
    /// Classify a chain by its level and risk score
    pub fn from_chain(level: ImpactLevel, risk_score: f64) -> Self {
        match level {
            ImpactLevel::Direct if risk_score >= 0.75 => ImpactSeverity::Critical,
            ImpactLevel::Direct => ImpactSeverity::High,
            ImpactLevel::Indirect if risk_score >= 0.5 => ImpactSeverity::High,
            ImpactLevel::Indirect => ImpactSeverity::Medium,
            ImpactLevel::Potential if risk_score >= 0.5 => ImpactSeverity::Medium,
            ImpactLevel::Potential => ImpactSeverity::Low,
        }
    }

    /// Get the severity as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactSeverity::Low => "low",
            ImpactSeverity::Medium => "medium",
            ImpactSeverity::High => "high",
            ImpactSeverity::Critical => "critical",
        }
    }
}

/// A single impact chain from a root document to an affected one
///
/// The path lists the documents traversed from the root up to (but not
/// including) the affected document, and never repeats an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactChain {
    /// Document the traversal started from
    pub root: DocumentId,

    /// Transitively affected document
    pub affected: DocumentId,

    /// Ordered, duplicate-free ids from root to the affected document's
    /// predecessor
    pub path: Vec<DocumentId>,

    /// Classification by path length
    pub impact_level: ImpactLevel,
}

impl ImpactChain {
    /// Build a chain, classifying it by path length
    ///
    /// Returns `None` if the path repeats a document id; traversals with a
    /// global visited set never produce such paths.
    pub fn new(root: DocumentId, affected: DocumentId, path: Vec<DocumentId>) -> Option<Self> {
        for (i, id) in path.iter().enumerate() {
            if path[i + 1..].contains(id) {
                return None;
            }
        }
        let impact_level = ImpactLevel::from_path_len(path.len());
        Some(Self {
            root,
            affected,
            path,
            impact_level,
        })
    }

    /// Number of citation hops from root to the affected document
    pub fn chain_len(&self) -> usize {
        self.path.len()
    }
}

/// An impact discovered across domain boundaries via semantic similarity
#[derive(Debug, Clone, PartialEq)]
pub struct CrossDomainImpact {
    /// Document whose change triggered the analysis
    pub source: DocumentId,

    /// Document impacted in another domain
    pub impacted: DocumentId,

    /// Citation path that carried the impact
    pub path: Vec<DocumentId>,

    /// Risk score: inverse chain length weighted by domain importance
    pub risk_score: f64,

    /// Domain code of the impacted document
    pub domain: String,
}
