//! Specification parsing and summarization for bian2context.
//!
//! Pipeline: directory listing -> format-sniffed document parse ->
//! per-document summary extraction.

pub mod directory;
pub mod extractor;
pub mod json;
pub mod registry;
pub mod traits;
pub mod yaml;

pub use directory::DirectorySummarizer;
pub use extractor::SummaryExtractor;
pub use json::JsonParser;
pub use registry::ParserRegistry;
pub use traits::DocumentParser;
pub use yaml::YamlParser;
