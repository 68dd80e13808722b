//! Conflict module - detected textual conflicts between documents

use crate::document::DocumentId;

/// Maximum confidence any heuristic conflict signal can reach
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Baseline confidence before evidence is counted
pub const BASE_CONFIDENCE: f64 = 0.7;

/// Kind of textual conflict between two documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictType {
    /// One text obliges or permits what the other prohibits or denies
    DirectContradiction,

    /// The texts regulate overlapping subjects or objects
    ScopeOverlap,

    /// The texts prescribe incompatible procedures
    ProceduralConflict,

    /// No conflict detected
    None,
}

impl ConflictType {
    /// Get the conflict type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictType::DirectContradiction => "direct_contradiction",
            ConflictType::ScopeOverlap => "scope_overlap",
            ConflictType::ProceduralConflict => "procedural_conflict",
            ConflictType::None => "none",
        }
    }
}

/// Heuristic confidence for a conflict backed by `evidence_count`
/// independent signals
///
/// Confidence is monotonically non-decreasing in the evidence count and
/// capped at [`MAX_CONFIDENCE`].
///
/// # Examples
///
/// ```
/// use blackstone_domain::conflict_confidence;
///
/// assert!(conflict_confidence(1) > conflict_confidence(0));
/// assert_eq!(conflict_confidence(10), 0.95);
/// ```
pub fn conflict_confidence(evidence_count: usize) -> f64 {
    let raw = BASE_CONFIDENCE + 0.1 * evidence_count as f64;
    raw.min(MAX_CONFIDENCE)
}

/// A detected conflict between two documents
///
/// `first` is the document under examination (the newly added or edited
/// one); `second` is the equally or more authoritative peer it conflicts
/// with. A conflict is a normal, recorded outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    /// Document under examination
    pub first: DocumentId,

    /// Conflicting authoritative peer
    pub second: DocumentId,

    /// Kind of conflict
    pub conflict_type: ConflictType,

    /// Heuristic confidence in [0, 0.95]
    pub confidence: f64,

    /// Evidence details (matched patterns, overlapping terms)
    pub details: Vec<String>,
}

/// Full diagnostic output of a conflict check
///
/// Callers that only need admissibility use the hierarchy manager's boolean
/// query; this report carries the reasons.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictReport {
    /// Document the check was run for
    pub document: DocumentId,

    /// All conflicts found, one per conflicting peer
    pub conflicts: Vec<Conflict>,

    /// How many valid authoritative peers were examined
    pub checked: usize,
}

impl ConflictReport {
    /// Whether any conflict in the report exceeds the given confidence
    pub fn has_conflict_above(&self, threshold: f64) -> bool {
        self.conflicts.iter().any(|c| c.confidence > threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_baseline_and_cap() {
        assert_eq!(conflict_confidence(0), BASE_CONFIDENCE);
        assert!((conflict_confidence(2) - 0.9).abs() < 1e-12);
        assert_eq!(conflict_confidence(3), MAX_CONFIDENCE);
        assert_eq!(conflict_confidence(100), MAX_CONFIDENCE);
    }

    #[test]
    fn test_report_threshold() {
        let report = ConflictReport {
            document: DocumentId::new("d1"),
            conflicts: vec![Conflict {
                first: DocumentId::new("d1"),
                second: DocumentId::new("d2"),
                conflict_type: ConflictType::ScopeOverlap,
                confidence: 0.8,
                details: vec!["employers".to_string()],
            }],
            checked: 4,
        };
        assert!(report.has_conflict_above(0.6));
        assert!(!report.has_conflict_above(0.9));
    }
}
