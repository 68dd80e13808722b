//! Contract module - review work items derived from document impact

use crate::document::DocumentId;
use crate::impact::ImpactSeverity;

/// Kind of contract affected by a document change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    /// Employment contracts
    Employment,
    /// Service agreements
    Service,
    /// Sales contracts
    Sales,
    /// Lease agreements
    Lease,
    /// Non-disclosure agreements
    Nda,
    /// Anything else
    Other,
}

impl ContractKind {
    /// Get the contract kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractKind::Employment => "employment",
            ContractKind::Service => "service",
            ContractKind::Sales => "sales",
            ContractKind::Lease => "lease",
            ContractKind::Nda => "nda",
            ContractKind::Other => "other",
        }
    }
}

/// Priority of a contract review work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReviewPriority {
    /// Review at the next scheduled pass
    Low,
    /// Review within the standard window
    Medium,
    /// Review soon
    High,
    /// Review immediately
    Urgent,
}

impl ReviewPriority {
    /// Derive a review priority from the severity of the triggering impact
    pub fn from_severity(severity: ImpactSeverity) -> Self {
        match severity {
            ImpactSeverity::Critical => ReviewPriority::Urgent,
            ImpactSeverity::High => ReviewPriority::High,
            ImpactSeverity::Medium => ReviewPriority::Medium,
            ImpactSeverity::Low => ReviewPriority::Low,
        }
    }

    /// Get the priority as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewPriority::Low => "low",
            ReviewPriority::Medium => "medium",
            ReviewPriority::High => "high",
            ReviewPriority::Urgent => "urgent",
        }
    }
}

/// A contract flagged for review because a document it relies on changed
#[derive(Debug, Clone, PartialEq)]
pub struct ContractReview {
    /// Identifier of the affected contract
    pub contract_id: String,

    /// Kind of the affected contract
    pub contract_kind: ContractKind,

    /// Document whose change triggered the review
    pub triggered_by: DocumentId,

    /// Review priority derived from impact severity
    pub priority: ReviewPriority,
}
