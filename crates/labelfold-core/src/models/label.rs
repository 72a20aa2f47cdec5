use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A raw, user-authored categorization string (e.g. a mail folder name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Label {
    /// The label as supplied by the caller, trimmed.
    pub original_name: String,
    /// Normalized form, filled in by the engine during grouping.
    #[serde(default)]
    pub normalized_name: Option<String>,
    /// Number of emails carrying this label.
    #[serde(default)]
    pub email_count: u64,
    /// Optional sample email subjects.
    #[serde(default)]
    pub sample_subjects: Option<Vec<String>>,
}

impl Label {
    /// Create a label from a raw name. Surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            original_name: name.as_ref().trim().to_string(),
            normalized_name: None,
            email_count: 0,
            sample_subjects: None,
        }
    }

    pub fn with_email_count(mut self, email_count: u64) -> Self {
        self.email_count = email_count;
        self
    }

    pub fn with_samples(mut self, samples: Vec<String>) -> Self {
        self.sample_subjects = Some(samples);
        self
    }

    /// A label is usable only if its trimmed name is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.original_name.trim().is_empty()
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
