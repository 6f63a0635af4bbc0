//! DirectorySummarizer — every eligible file in a directory, in name order.

use bian_core::{BianError, DomainSummary, Result, SummarizerConfig};
use crate::extractor::SummaryExtractor;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct DirectorySummarizer {
    extractor: SummaryExtractor,
    config: SummarizerConfig,
}

impl DirectorySummarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        Self::with_extractor(SummaryExtractor::default(), config)
    }

    pub fn with_extractor(extractor: SummaryExtractor, config: SummarizerConfig) -> Self {
        Self { extractor, config }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn extractor(&self) -> &SummaryExtractor {
        &self.extractor
    }

    /// Eligible files directly inside `dir` (non-recursive), sorted by file name.
    pub fn eligible_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let read_dir = std::fs::read_dir(dir).map_err(|source| BianError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| BianError::DirectoryRead {
                path: dir.to_path_buf(),
                source,
            })?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !self.config.is_eligible(&name) {
                continue;
            }
            let path = entry.path();
            if !path.is_file() {
                debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }
            files.push((name, path));
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files.into_iter().map(|(_, path)| path).collect())
    }

    /// Summarize the directory using the configured compression flag.
    pub fn summarize(&self, dir: &Path) -> Result<Vec<DomainSummary>> {
        self.summarize_directory(dir, self.config.compress)
    }

    /// Summarize every eligible file, preserving listing order.
    ///
    /// An empty directory only logs a warning. Malformed files become
    /// sentinel summaries; unreadable files abort with an error.
    pub fn summarize_directory(&self, dir: &Path, compress: bool) -> Result<Vec<DomainSummary>> {
        let files = self.eligible_files(dir)?;
        if files.is_empty() {
            warn!(
                "No files with {} found in {}",
                self.config.extensions.join(", "),
                dir.display()
            );
            return Ok(Vec::new());
        }
        files
            .iter()
            .map(|file| self.extractor.extract(file, compress))
            .collect()
    }
}

impl Default for DirectorySummarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}
