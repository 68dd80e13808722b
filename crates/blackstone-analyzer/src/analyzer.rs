//! Core conflict analysis

use crate::patterns::{POLARITY_PAIRS, PROCEDURAL};
use crate::scope::ScopeProfile;
use blackstone_domain::traits::{ConflictAnalysis, TextAnalyzer};
use blackstone_domain::{conflict_confidence, ConflictType};
use tracing::debug;

/// Regex-heuristic implementation of [`TextAnalyzer`]
///
/// Stateless; one instance can serve any number of comparisons. Checks run
/// in order and the first conclusive stage wins:
/// direct contradiction, then scope overlap, then "no conflict".
///
/// # Examples
///
/// ```
/// use blackstone_analyzer::ConflictAnalyzer;
/// use blackstone_domain::traits::TextAnalyzer;
/// use blackstone_domain::ConflictType;
///
/// let analyzer = ConflictAnalyzer::new();
/// let result = analyzer.analyze(
///     "Citizens shall not have the right to privacy.",
///     "Citizens shall have the right to privacy.",
/// );
/// assert!(result.has_conflict);
/// assert_eq!(result.conflict_type, ConflictType::DirectContradiction);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictAnalyzer;

impl ConflictAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self
    }

    /// Stage 1: polarity-pair contradictions, tested in both directions
    fn detect_contradiction(&self, candidate: &str, existing: &str) -> Option<ConflictAnalysis> {
        let mut details = Vec::new();

        for pair in POLARITY_PAIRS.iter() {
            let (cand_pos, cand_neg) = pair.polarity(candidate);
            let (exist_pos, exist_neg) = pair.polarity(existing);

            if cand_pos && exist_neg {
                details.push(format!(
                    "{}: candidate asserts what the existing text negates",
                    pair.name
                ));
            }
            if cand_neg && exist_pos {
                details.push(format!(
                    "{}: candidate negates what the existing text asserts",
                    pair.name
                ));
            }
        }

        if details.is_empty() {
            return None;
        }

        let confidence = conflict_confidence(details.len());
        debug!(evidence = details.len(), "direct contradiction detected");
        Some(ConflictAnalysis {
            has_conflict: true,
            conflict_type: ConflictType::DirectContradiction,
            confidence,
            details,
        })
    }

    /// Stage 2: overlapping regulatory scope
    fn detect_overlap(&self, candidate: &str, existing: &str) -> Option<ConflictAnalysis> {
        let cand_profile = ScopeProfile::extract(candidate);
        let exist_profile = ScopeProfile::extract(existing);

        let shared_subjects = cand_profile.shared_subjects(&exist_profile);
        let shared_objects = cand_profile.shared_objects(&exist_profile);

        if shared_subjects.is_empty() && shared_objects.is_empty() {
            return None;
        }

        let mut details = Vec::new();
        for term in &shared_subjects {
            details.push(format!("shared subject: {}", term));
        }
        for term in &shared_objects {
            details.push(format!("shared object: {}", term));
        }

        // Overlap inside procedural vocabulary on both sides points at
        // competing procedures rather than competing substance.
        let conflict_type = if PROCEDURAL.is_match(&candidate.to_lowercase())
            && PROCEDURAL.is_match(&existing.to_lowercase())
        {
            ConflictType::ProceduralConflict
        } else {
            ConflictType::ScopeOverlap
        };

        let confidence = conflict_confidence(details.len());
        debug!(
            evidence = details.len(),
            kind = conflict_type.as_str(),
            "scope overlap detected"
        );
        Some(ConflictAnalysis {
            has_conflict: true,
            conflict_type,
            confidence,
            details,
        })
    }
}

impl TextAnalyzer for ConflictAnalyzer {
    fn analyze(&self, candidate: &str, existing: &str) -> ConflictAnalysis {
        if let Some(result) = self.detect_contradiction(candidate, existing) {
            return result;
        }
        if let Some(result) = self.detect_overlap(candidate, existing) {
            return result;
        }
        ConflictAnalysis::none()
    }
}
