//! Phase 7: Mapping — every member's original name to its group's canonical name.

use std::collections::BTreeMap;

use labelfold_core::LabelGroup;

pub fn build_mapping(groups: &[LabelGroup]) -> BTreeMap<String, String> {
    let mut mapping = BTreeMap::new();
    for group in groups {
        for name in group.original_names() {
            mapping.insert(name.to_string(), group.canonical_name.clone());
        }
    }
    mapping
}
