//! Polarity-pair patterns for direct contradiction detection

use regex::Regex;
use std::sync::LazyLock;

/// A family of deontic expressions with a positive and a negative side
///
/// A text is "positive" for the family when it matches the positive pattern
/// more often than the negative one (a negated modal also matches the bare
/// modal, so raw positive counts must exceed negative counts). A direct
/// contradiction is one text on each side of the same family.
pub struct PolarityPair {
    /// Family name used in evidence details
    pub name: &'static str,
    positive: &'static LazyLock<Regex>,
    negative: &'static LazyLock<Regex>,
}

static OBLIGATION_POS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:shall|must)\b").unwrap());
static OBLIGATION_NEG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:shall|must)\s+not\b").unwrap());

static PERMISSION_POS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:may|(?:is|are)\s+permitted\s+to)\b").unwrap());
static PERMISSION_NEG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:may\s+not|(?:is|are)\s+prohibited\s+from|prohibited|forbidden)\b").unwrap()
});

static ENTITLEMENT_POS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:(?:is|are)\s+entitled\s+to|(?:has|have)\s+(?:the\s+)?right\s+to)\b").unwrap()
});
static ENTITLEMENT_NEG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:not\s+(?:have\s+(?:the\s+)?right\s+to|entitled\s+to)|(?:has|have)\s+no\s+right\s+to|(?:is|are)\s+denied\s+(?:the\s+)?right\s+to)\b",
    )
    .unwrap()
});

/// Procedural vocabulary used to distinguish procedural conflicts from
/// plain scope overlap
pub static PROCEDURAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:procedure|deadline|within\s+\d+\s+days|notify|notification|submit|submission|application|file[ds]?\b)")
        .unwrap()
});

/// The fixed set of polarity families
pub static POLARITY_PAIRS: [PolarityPair; 3] = [
    PolarityPair {
        name: "obligation-vs-prohibition",
        positive: &OBLIGATION_POS,
        negative: &OBLIGATION_NEG,
    },
    PolarityPair {
        name: "permission-vs-prohibition",
        positive: &PERMISSION_POS,
        negative: &PERMISSION_NEG,
    },
    PolarityPair {
        name: "entitlement-vs-denial",
        positive: &ENTITLEMENT_POS,
        negative: &ENTITLEMENT_NEG,
    },
];

impl PolarityPair {
    /// Classify a text against this family: (matches positive, matches
    /// negative)
    pub fn polarity(&self, text: &str) -> (bool, bool) {
        let lower = text.to_lowercase();
        let pos_count = self.positive.find_iter(&lower).count();
        let neg_count = self.negative.find_iter(&lower).count();
        (pos_count > neg_count, neg_count > 0)
    }
}
