//! Strict JSON parser.

use anyhow::Result;
use bian_core::Document;
use crate::traits::DocumentParser;

pub struct JsonParser;

impl JsonParser {
    pub fn new() -> Self { Self }
}

impl DocumentParser for JsonParser {
    fn format(&self) -> &'static str {
        "json"
    }

    fn parse_content(&self, content: &str) -> Result<Document> {
        Ok(serde_json::from_str(content)?)
    }

    fn supported_extensions(&self) -> Vec<String> {
        vec![".json".into()]
    }
}

impl Default for JsonParser {
    fn default() -> Self { Self::new() }
}
