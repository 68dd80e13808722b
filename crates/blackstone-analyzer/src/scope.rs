//! Coarse subject/action/object extraction for scope-overlap detection

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Capitalized noun phrase immediately before a modal verb
static SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][A-Za-z]*(?:\s+[a-z]+){0,2})\s+(?:shall|must|may|is|are)\b").unwrap()
});

/// Modal and obligation verbs
static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(shall|must|may|prohibited|forbidden|required|entitled|obliged)\b").unwrap()
});

/// Preposition-governed phrase (up to three words)
static OBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:of|to|for|on|regarding|concerning)\s+([a-z]+(?:\s+[a-z]+){0,2})").unwrap()
});

/// Words carrying no scope information on their own
const STOPWORDS: &[&str] = &[
    "the", "a", "an", "any", "all", "such", "not", "no", "be", "have", "has", "their", "its",
];

/// Coarse scope profile of a text: who it binds, what it demands, and what
/// it is about
///
/// Sets are ordered so evidence details come out deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeProfile {
    /// Regulated parties (lowercased noun phrases)
    pub subjects: BTreeSet<String>,

    /// Modal/obligation verbs present
    pub actions: BTreeSet<String>,

    /// Regulated matters (lowercased preposition objects)
    pub objects: BTreeSet<String>,
}

impl ScopeProfile {
    /// Extract a profile from a text body
    pub fn extract(text: &str) -> Self {
        let mut profile = ScopeProfile::default();

        for cap in SUBJECT.captures_iter(text) {
            if let Some(term) = normalize(&cap[1]) {
                profile.subjects.insert(term);
            }
        }

        let lower = text.to_lowercase();
        for cap in ACTION.captures_iter(&lower) {
            profile.actions.insert(cap[1].to_string());
        }
        for cap in OBJECT.captures_iter(&lower) {
            if let Some(term) = normalize(&cap[1]) {
                profile.objects.insert(term);
            }
        }

        profile
    }

    /// Terms shared between two profiles' subject sets
    pub fn shared_subjects(&self, other: &ScopeProfile) -> Vec<String> {
        self.subjects.intersection(&other.subjects).cloned().collect()
    }

    /// Terms shared between two profiles' object sets
    pub fn shared_objects(&self, other: &ScopeProfile) -> Vec<String> {
        self.objects.intersection(&other.objects).cloned().collect()
    }
}

/// Lowercase a phrase and strip leading stopwords; drop it entirely when
/// nothing informative remains
fn normalize(phrase: &str) -> Option<String> {
    let words: Vec<&str> = phrase
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    let mut out: Vec<String> = Vec::new();
    for word in words {
        let lower = word.to_lowercase();
        if out.is_empty() && STOPWORDS.contains(&lower.as_str()) {
            continue;
        }
        out.push(lower);
    }
    while let Some(last) = out.last() {
        if STOPWORDS.contains(&last.as_str()) {
            out.pop();
        } else {
            break;
        }
    }

    if out.is_empty() {
        None
    } else {
        Some(out.join(" "))
    }
}
