//! Phase 1: Filter — keep labels whose trimmed name is non-empty.

use labelfold_core::Label;

/// Drop empty labels and trim the survivors. Order is preserved.
pub fn filter_labels(labels: Vec<Label>) -> Vec<Label> {
    labels
        .into_iter()
        .filter_map(|mut label| {
            let trimmed = label.original_name.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.len() != label.original_name.len() {
                label.original_name = trimmed.to_string();
            }
            Some(label)
        })
        .collect()
}
