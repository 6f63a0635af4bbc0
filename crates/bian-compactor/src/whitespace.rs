//! Whitespace normalization.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run (newlines and tabs included) to one space, then trim.
pub fn collapse(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    RE_WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
