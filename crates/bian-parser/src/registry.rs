//! Format sniffing: picks a parser from the file extension.

use bian_core::{BianError, Document, Result};
use crate::json::JsonParser;
use crate::traits::{read_lossy, DocumentParser};
use crate::yaml::YamlParser;
use std::path::Path;
use tracing::error;

/// Routes files to the first parser claiming their extension. Unclaimed
/// extensions go to the YAML parser.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn DocumentParser>>,
    fallback: Box<dyn DocumentParser>,
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            parsers: vec![Box::new(JsonParser::new()), Box::new(YamlParser::new())],
            fallback: Box::new(YamlParser::new()),
        }
    }

    /// Parser responsible for `path`.
    pub fn parser_for(&self, path: &Path) -> &dyn DocumentParser {
        match self.parsers.iter().find(|p| p.can_parse(path)) {
            Some(parser) => &**parser,
            None => &*self.fallback,
        }
    }

    /// Read and parse one file.
    ///
    /// Read failures are returned as errors. Syntax errors are logged and
    /// reported as `Ok(None)`.
    pub fn parse(&self, path: &Path) -> Result<Option<Document>> {
        match self.try_parse(path) {
            Ok(doc) => Ok(Some(doc)),
            Err(err) if err.is_recoverable() => {
                error!("{err}");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Like [`parse`](Self::parse) but surfaces syntax errors as [`BianError::Parse`].
    pub fn try_parse(&self, path: &Path) -> Result<Document> {
        let content = read_lossy(path).map_err(|source| BianError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let parser = self.parser_for(path);
        parser.parse_content(&content).map_err(|e| BianError::Parse {
            path: path.to_path_buf(),
            format: parser.format().to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for ParserRegistry {
    fn default() -> Self { Self::new() }
}
