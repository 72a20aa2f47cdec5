//! Significant-term extraction and overlap checks used by fuzzy matching.

use std::collections::HashSet;

use labelfold_core::constants::{MIN_CONTAINMENT_LENGTH, MIN_TERM_LENGTH};

/// Tokens of a normalized label with at least `MIN_TERM_LENGTH` characters.
pub fn significant_terms(normalized: &str) -> HashSet<String> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TERM_LENGTH)
        .map(str::to_string)
        .collect()
}

/// True if the term sets share a term, or if a term of one contains a term of
/// the other (both at least `MIN_CONTAINMENT_LENGTH` characters).
pub fn terms_overlap(a: &HashSet<String>, b: &HashSet<String>) -> bool {
    !a.is_disjoint(b) || has_containment(a, b)
}

fn has_containment(a: &HashSet<String>, b: &HashSet<String>) -> bool {
    let long = |t: &&String| t.chars().count() >= MIN_CONTAINMENT_LENGTH;
    a.iter().filter(long).any(|x| {
        b.iter()
            .filter(long)
            .any(|y| x.contains(y.as_str()) || y.contains(x.as_str()))
    })
}
