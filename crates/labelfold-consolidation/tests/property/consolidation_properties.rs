//! Property tests for labelfold-consolidation.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use labelfold_consolidation::engine::LabelConsolidator;
use labelfold_consolidation::{normalize, SimilarityScorer};
use labelfold_core::ConsolidationConfig;

fn label_batch() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9 ./&-]{0,16}", 0..40)
}

fn engine(max_categories: usize, threshold: f64, aggressive: bool) -> LabelConsolidator {
    let config = ConsolidationConfig::new(max_categories, threshold)
        .unwrap()
        .with_aggressive_normalization(aggressive);
    LabelConsolidator::new(config)
}

// Every distinct non-blank input label maps to exactly one group.
proptest! {
    #[test]
    fn prop_every_label_mapped_once(
        labels in label_batch(),
        max in 1usize..30,
        threshold in 0.0f64..=1.0,
        aggressive in any::<bool>(),
    ) {
        let result = engine(max, threshold, aggressive).consolidate(&labels);

        let distinct: HashSet<&str> = labels
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        let keys: HashSet<&str> = result.mapping.keys().map(String::as_str).collect();
        prop_assert_eq!(&keys, &distinct);

        let mut owners: HashMap<&str, usize> = HashMap::new();
        for group in &result.label_groups {
            for name in group.original_names().collect::<HashSet<_>>() {
                *owners.entry(name).or_default() += 1;
            }
        }
        for name in &distinct {
            prop_assert_eq!(owners.get(name).copied(), Some(1));
        }
        for (label, canonical) in &result.mapping {
            prop_assert!(result.group_named(canonical).is_some(), "{} -> {}", label, canonical);
        }
    }
}

// The category limit is a hard ceiling.
proptest! {
    #[test]
    fn prop_final_count_within_limit(
        labels in label_batch(),
        max in 1usize..30,
        threshold in 0.0f64..=1.0,
    ) {
        let result = engine(max, threshold, true).consolidate(&labels);
        prop_assert!(result.final_count <= max);
        prop_assert!(result.final_count <= result.original_count);
        prop_assert_eq!(result.final_count, result.label_groups.len());
    }
}

// No label is lost or duplicated across groups.
proptest! {
    #[test]
    fn prop_members_sum_to_original_count(
        labels in label_batch(),
        max in 1usize..30,
    ) {
        let outcome = engine(max, 0.8, true).consolidate_with_stats(&labels);
        let members: usize = outcome.result.label_groups.iter().map(|g| g.member_count()).sum();
        prop_assert_eq!(members, outcome.result.original_count);
        prop_assert_eq!(outcome.stats.total_labels_processed, outcome.result.original_count);
        for group in &outcome.result.label_groups {
            prop_assert!((0.0..=1.0).contains(&group.similarity_score));
            prop_assert!(group.member_count() > 0);
        }
    }
}

// Same input, same output.
proptest! {
    #[test]
    fn prop_deterministic(labels in label_batch(), max in 1usize..30) {
        let first = engine(max, 0.8, true).consolidate(&labels);
        let second = engine(max, 0.8, true).consolidate(&labels);
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(label in "[ -~]{0,24}", aggressive in any::<bool>()) {
        let once = normalize(&label, aggressive);
        prop_assert_eq!(normalize(&once, aggressive), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
        prop_assert!(!once.contains("  "));
    }
}

proptest! {
    #[test]
    fn prop_similarity_bounded_and_symmetric(a in "[ -~]{0,20}", b in "[ -~]{0,20}") {
        let scorer = SimilarityScorer::new(true);
        let ab = scorer.similarity(&a, &b);
        let ba = scorer.similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab.combined_score()));
        prop_assert!((ab.combined_score() - ba.combined_score()).abs() < 1e-12);
        prop_assert_eq!(scorer.combined_score(&a, &a), 1.0);
    }
}
