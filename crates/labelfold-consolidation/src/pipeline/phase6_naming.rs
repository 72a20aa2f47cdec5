//! Phase 6: Canonical naming — name each group after its most frequent word.

use std::collections::HashMap;

use labelfold_core::constants::{MIN_CANONICAL_WORD_LENGTH, OTHER_BUCKET_NAME};
use labelfold_core::LabelGroup;

use crate::algorithms::similarity::SimilarityScorer;

/// Rename every group except the "other" bucket after the most frequent word
/// (longer than two characters) across its members' normalized names.
/// Groups without such a word keep their current name.
pub fn assign_canonical_names(groups: &mut [LabelGroup], scorer: &SimilarityScorer) {
    for group in groups.iter_mut() {
        if group.canonical_name == OTHER_BUCKET_NAME {
            continue;
        }
        if let Some(word) = most_frequent_word(group, scorer) {
            group.canonical_name = word;
        }
    }
}

/// Most frequent qualifying word; ties go to the word seen first.
pub fn most_frequent_word(group: &LabelGroup, scorer: &SimilarityScorer) -> Option<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for label in &group.labels {
        let normalized = scorer.normalize(&label.original_name);
        for word in normalized.split_whitespace() {
            if word.chars().count() <= MIN_CANONICAL_WORD_LENGTH {
                continue;
            }
            match index.get(word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word.to_string(), counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }
    }

    let mut best: Option<&(String, usize)> = None;
    for entry in &counts {
        if best.map_or(true, |b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.map(|(word, _)| word.clone())
}
