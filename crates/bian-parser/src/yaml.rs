//! YAML parser. Also accepts JSON-compatible content.

use anyhow::Result;
use bian_core::document::to_text;
use bian_core::Document;
use crate::traits::DocumentParser;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;

pub struct YamlParser;

impl YamlParser {
    pub fn new() -> Self { Self }
}

impl DocumentParser for YamlParser {
    fn format(&self) -> &'static str {
        "yaml"
    }

    fn parse_content(&self, content: &str) -> Result<Document> {
        let mut raw: YamlValue = serde_yaml::from_str(content)?;
        raw.apply_merge()?;
        Ok(to_document(raw))
    }

    fn supported_extensions(&self) -> Vec<String> {
        vec![".yaml".into(), ".yml".into()]
    }
}

impl Default for YamlParser {
    fn default() -> Self { Self::new() }
}

/// Convert a YAML tree into the JSON document model.
///
/// Non-string mapping keys are stringified and tags are dropped. Infinities
/// become `"Infinity"` / `"-Infinity"` text; NaN becomes null.
pub fn to_document(value: YamlValue) -> Document {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                match n.as_f64() {
                    Some(f) if f.is_infinite() => {
                        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
                        Value::String(text.into())
                    }
                    Some(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
                    None => Value::Null,
                }
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(to_document).collect()),
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (k, v) in mapping {
                let key = match to_document(k) {
                    Value::String(s) => s,
                    other => to_text(&other),
                };
                map.insert(key, to_document(v));
            }
            Value::Object(map)
        }
        YamlValue::Tagged(tagged) => to_document(tagged.value),
    }
}
