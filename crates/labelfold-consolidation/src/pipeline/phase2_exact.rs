//! Phase 2: Exact grouping — labels that normalize identically share a group.
//!
//! Buckets keep first-occurrence order. Multi-member buckets become groups
//! with score 1.0; single-member buckets go on to fuzzy matching in input
//! order.

use std::collections::HashMap;

use labelfold_core::constants::EXACT_MATCH_SCORE;
use labelfold_core::{Label, LabelGroup};

use super::GroupIds;
use crate::algorithms::similarity::SimilarityScorer;

/// Output of exact grouping.
#[derive(Debug, Clone)]
pub struct ExactGrouping {
    pub groups: Vec<LabelGroup>,
    /// Labels whose normalized form is unique, in input order.
    pub singletons: Vec<Label>,
}

pub fn group_exact(
    labels: Vec<Label>,
    scorer: &SimilarityScorer,
    ids: &mut GroupIds,
) -> ExactGrouping {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<Label>> = HashMap::new();

    for mut label in labels {
        let normalized = scorer.normalize(&label.original_name);
        label.normalized_name = Some(normalized.clone());
        buckets
            .entry(normalized.clone())
            .or_insert_with(|| {
                order.push(normalized);
                Vec::new()
            })
            .push(label);
    }

    let mut groups = Vec::new();
    let mut singletons = Vec::new();
    for key in order {
        let members = buckets.remove(&key).unwrap_or_default();
        if members.len() > 1 {
            let canonical = most_frequent_literal(&members);
            groups.push(LabelGroup::new(ids.allocate(), canonical, members, EXACT_MATCH_SCORE));
        } else {
            singletons.extend(members);
        }
    }

    ExactGrouping { groups, singletons }
}

/// Most frequent literal name; ties go to the shortest, then the first seen.
fn most_frequent_literal(members: &[Label]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for label in members {
        match counts.iter_mut().find(|(name, _)| *name == label.original_name) {
            Some(entry) => entry.1 += 1,
            None => counts.push((label.original_name.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        let better = match best {
            None => true,
            Some((best_name, best_count)) => {
                count > best_count
                    || (count == best_count && name.chars().count() < best_name.chars().count())
            }
        };
        if better {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string()).unwrap_or_default()
}
