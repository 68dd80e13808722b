//! Legal domain module - named regulatory domains and their processing rules

use crate::document::DocumentKind;

/// Compliance deadline attached to a domain requirement
#[derive(Debug, Clone, PartialEq)]
pub enum DeadlineKind {
    /// Must be handled as soon as the change lands
    Immediate,

    /// Standard statutory period, in days
    Standard {
        /// Length of the period in days
        period_days: u32,
    },

    /// Free-form deadline described by the domain owner
    Custom {
        /// Description of the deadline
        note: String,
    },
}

/// A compliance requirement owned by a legal domain
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceRequirement {
    /// Requirement name
    pub name: String,

    /// Deadline applied when a relevant document changes
    pub deadline: DeadlineKind,
}

/// A document-processing rule owned by a legal domain
///
/// Rules are matched against incoming documents by the agents scoped to the
/// domain; higher priority wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingRule {
    /// Rule name
    pub name: String,

    /// Match pattern (interpreted by the consuming agent)
    pub pattern: String,

    /// Priority; higher values are applied first
    pub priority: u32,

    /// Action identifier executed on match
    pub action: String,
}

/// A named legal domain
///
/// Domains scope agent behavior: which document kinds they accept, which
/// processing rules apply, and which compliance deadlines changes trigger.
/// The code is the unique registry key.
#[derive(Debug, Clone, PartialEq)]
pub struct LegalDomain {
    /// Unique domain code (registry key)
    pub code: String,

    /// Display name
    pub name: String,

    /// Description of what the domain covers
    pub description: String,

    /// Whether the domain is active
    pub active: bool,

    /// Document kinds processed in this domain
    pub document_types: Vec<DocumentKind>,

    /// Processing rules applied by agents scoped to this domain
    pub processing_rules: Vec<ProcessingRule>,

    /// Compliance requirements triggered by changes in this domain
    pub compliance_requirements: Vec<ComplianceRequirement>,
}

impl LegalDomain {
    /// Create a new active domain with no rules or requirements
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            active: true,
            document_types: Vec::new(),
            processing_rules: Vec::new(),
            compliance_requirements: Vec::new(),
        }
    }

    /// Check structural validity of the record
    ///
    /// Code, name, and description must be non-empty. The collection fields
    /// are statically typed; a malformed payload fails at the
    /// deserialization boundary before it can reach this check.
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("domain code must not be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("domain name must not be empty".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("domain description must not be empty".to_string());
        }
        Ok(())
    }
}
