//! Label normalization: lowercase, trim, strip trailing punctuation, collapse
//! whitespace, and optionally drop everything outside `[a-z0-9 ]`.

use regex::Regex;
use std::sync::LazyLock;

static TRAILING_PUNCTUATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[.,;:!?\-_\s]+$").ok());

static NON_ALPHANUMERIC: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9 ]").ok());

/// Canonicalize a raw label for comparison. Pure and infallible.
pub fn normalize(label: &str, aggressive: bool) -> String {
    if label.is_empty() {
        return String::new();
    }

    let lowered = label.to_lowercase();
    let stripped = replace_all(&TRAILING_PUNCTUATION, lowered.trim());
    let normalized = collapse_whitespace(&stripped);

    if aggressive {
        collapse_whitespace(&replace_all(&NON_ALPHANUMERIC, &normalized))
    } else {
        normalized
    }
}

fn replace_all(pattern: &LazyLock<Option<Regex>>, text: &str) -> String {
    match pattern.as_ref() {
        Some(re) => re.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
