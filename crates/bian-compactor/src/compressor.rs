//! TermCompressor — dictionary rewrite followed by whitespace cleanup.

use crate::dictionary::ReplacementDictionary;
use crate::whitespace;
use serde_json::Value;
use std::sync::Arc;

/// Pure text compressor over an injected dictionary.
#[derive(Debug, Clone)]
pub struct TermCompressor {
    dictionary: Arc<ReplacementDictionary>,
}

impl TermCompressor {
    pub fn new(dictionary: Arc<ReplacementDictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &ReplacementDictionary {
        &self.dictionary
    }

    /// Normalize `text`, abbreviating dictionary phrases when `apply` is set.
    ///
    /// With `apply == false` this only trims and collapses whitespace.
    pub fn compress(&self, text: &str, apply: bool) -> String {
        if !apply {
            return whitespace::collapse(text);
        }
        whitespace::collapse(&self.dictionary.apply(text))
    }

    /// Compress a document field. Anything other than a string yields `""`.
    pub fn compress_value(&self, value: Option<&Value>, apply: bool) -> String {
        match value {
            Some(Value::String(s)) => self.compress(s, apply),
            _ => String::new(),
        }
    }
}

impl Default for TermCompressor {
    fn default() -> Self {
        Self::new(ReplacementDictionary::bian())
    }
}
