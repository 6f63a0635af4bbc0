use serde::{Deserialize, Serialize};

/// Extensions eligible for summarization, matched as case-sensitive suffixes.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Apply the abbreviation dictionary to titles, descriptions and event names.
    pub compress: bool,
    pub extensions: Vec<String>,
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a file name carries one of the configured suffixes.
    pub fn is_eligible(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            compress: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}
