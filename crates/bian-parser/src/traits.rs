use anyhow::Result;
use bian_core::Document;
use std::path::Path;

/// Trait for specification document parsers.
pub trait DocumentParser: Send + Sync {
    /// Short format label used in diagnostics.
    fn format(&self) -> &'static str;

    /// Parse content string.
    fn parse_content(&self, content: &str) -> Result<Document>;

    /// Parse from file path.
    fn parse_file(&self, path: &Path) -> Result<Document> {
        let content = read_lossy(path)?;
        self.parse_content(&content)
    }

    /// Supported file extensions.
    fn supported_extensions(&self) -> Vec<String>;

    /// Check if a file can be parsed. Extensions compare case-insensitively.
    fn can_parse(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let ext_with_dot = format!(".{}", ext);
        self.supported_extensions().contains(&ext_with_dot)
    }
}

/// Read a file, replacing invalid UTF-8 sequences instead of failing.
pub fn read_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
