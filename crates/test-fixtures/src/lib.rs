//! Test fixture loader for labelfold label corpora.
//!
//! Provides typed deserialization of the JSON fixtures under `labels/` and
//! helper functions for loading them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// A named list of raw labels with optional expectations.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelCorpus {
    #[serde(default)]
    pub description: String,
    pub labels: Vec<String>,
    /// Override for `max_categories`; tests use the default when absent.
    #[serde(default)]
    pub max_categories: Option<usize>,
    #[serde(default)]
    pub expected_final_count: Option<usize>,
    #[serde(default)]
    pub expected_canonical: Option<String>,
}

impl LabelCorpus {
    /// Distinct non-empty trimmed labels, in first-seen order.
    pub fn distinct_labels(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.labels
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty() && seen.insert(l.clone()))
            .collect()
    }
}

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a label corpus by file stem, e.g. `"news_outlets"`.
pub fn load_corpus(name: &str) -> LabelCorpus {
    load_fixture(&format!("labels/{name}.json"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// All corpus names under `labels/`, sorted.
pub fn list_corpora() -> Vec<String> {
    let dir = fixtures_root().join("labels");
    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                path.file_stem()?.to_str().map(str::to_string)
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names
}
