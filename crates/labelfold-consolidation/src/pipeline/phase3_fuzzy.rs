//! Phase 3: Fuzzy matching — greedy, online assignment of singleton labels.
//!
//! Labels are processed in input order against groups in creation order.
//! A label joins the first group whose effective score beats the running best
//! and reaches the similarity threshold; otherwise it starts a new group.
//! Joining a group leaves its score untouched.
//! Groups created here are visible to every later label.

use std::collections::HashSet;

use labelfold_core::constants::{EXACT_MATCH_SCORE, TERM_OVERLAP_SCORE};
use labelfold_core::{Label, LabelGroup};
use tracing::debug;

use super::GroupIds;
use crate::algorithms::similarity::SimilarityScorer;
use crate::algorithms::terms::{significant_terms, terms_overlap};

/// Assign each singleton label to an existing group or a new one.
///
/// Returns the number of labels absorbed into existing groups.
pub fn assign_fuzzy(
    singletons: Vec<Label>,
    groups: &mut Vec<LabelGroup>,
    scorer: &SimilarityScorer,
    similarity_threshold: f64,
    ids: &mut GroupIds,
) -> usize {
    // Canonical names are fixed during this phase, so their terms are cached.
    let mut group_terms: Vec<HashSet<String>> = groups
        .iter()
        .map(|g| significant_terms(&scorer.normalize(&g.canonical_name)))
        .collect();
    let mut absorbed = 0;

    for mut label in singletons {
        let normalized = match label.normalized_name.take() {
            Some(n) => n,
            None => scorer.normalize(&label.original_name),
        };
        let label_terms = significant_terms(&normalized);
        label.normalized_name = Some(normalized);

        let mut best: Option<usize> = None;
        let mut best_score = 0.0;
        for (idx, group) in groups.iter().enumerate() {
            let mut score = scorer.combined_score(&label.original_name, &group.canonical_name);
            if terms_overlap(&label_terms, &group_terms[idx]) {
                score = score.max(TERM_OVERLAP_SCORE);
            }
            if score > best_score && score >= similarity_threshold {
                best_score = score;
                best = Some(idx);
            }
        }

        match best {
            Some(idx) => {
                let group = &mut groups[idx];
                debug!(
                    label = %label.original_name,
                    group = %group.canonical_name,
                    score = best_score,
                    "fuzzy match"
                );
                group.labels.push(label);
                absorbed += 1;
            }
            None => {
                group_terms.push(label_terms);
                let canonical = label.original_name.clone();
                groups.push(LabelGroup::new(
                    ids.allocate(),
                    canonical,
                    vec![label],
                    EXACT_MATCH_SCORE,
                ));
            }
        }
    }

    absorbed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(names: &[&str], threshold: f64) -> Vec<LabelGroup> {
        let mut groups = Vec::new();
        let mut ids = GroupIds::default();
        assign_fuzzy(
            names.iter().map(|n| Label::new(n)).collect(),
            &mut groups,
            &SimilarityScorer::new(true),
            threshold,
            &mut ids,
        );
        groups
    }

    #[test]
    fn shared_term_joins_first_group() {
        let groups = run(&["Fox News", "CNN News", "BBC News", "Daily News"], 0.8);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].canonical_name, "Fox News");
        assert_eq!(groups[0].member_count(), 4);
        assert_eq!(groups[0].similarity_score, 1.0);
    }

    #[test]
    fn unrelated_labels_create_singletons() {
        let groups = run(&["Travel", "Invoices", "Family"], 0.8);
        assert_eq!(groups.len(), 3);
        let names: Vec<_> = groups.iter().map(|g| g.canonical_name.as_str()).collect();
        assert_eq!(names, vec!["Travel", "Invoices", "Family"]);
        assert!(groups.iter().all(|g| g.similarity_score == 1.0));
    }

    #[test]
    fn containment_counts_as_overlap() {
        let groups = run(&["Newsletters", "News"], 0.8);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn order_decides_membership() {
        // "Work Travel" overlaps both earlier groups; the first created wins.
        let groups = run(&["Work", "Travel", "Work Travel"], 0.8);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].member_count(), 2);

        let reversed = run(&["Travel", "Work", "Work Travel"], 0.8);
        assert_eq!(reversed[0].canonical_name, "Travel");
        assert_eq!(reversed[0].member_count(), 2);
    }

    #[test]
    fn threshold_above_overlap_floor_blocks_term_matches() {
        let groups = run(&["Fox News", "CNN News"], 0.95);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn joins_existing_exact_groups() {
        let mut groups = vec![LabelGroup::new(
            0,
            "Receipts",
            vec![Label::new("Receipts"), Label::new("receipts")],
            1.0,
        )];
        let mut ids = GroupIds::starting_at(1);
        let absorbed = assign_fuzzy(
            vec![Label::new("Old Receipts")],
            &mut groups,
            &SimilarityScorer::new(true),
            0.8,
            &mut ids,
        );
        assert_eq!(absorbed, 1);
        assert_eq!(groups[0].member_count(), 3);
        assert_eq!(groups[0].similarity_score, 1.0);
    }
}
