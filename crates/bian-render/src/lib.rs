//! Output rendering for bian2context.
//!
//! Turns summaries into the compact line format (`#DICT`, `#DATA`,
//! `#DOMAINS`, `#ENTITIES`, `#EVENTS` sections with `SD=`, `E=` and `DE=`
//! records) or into pretty-printed JSON.

pub mod filter;
pub mod json;
pub mod mode;
pub mod text;

pub use filter::filter_by_domain;
pub use mode::{OutputFormat, OutputMode, RenderOptions};

use bian_compactor::ReplacementDictionary;
use bian_core::{DomainSummary, Result};
use std::sync::Arc;
use tracing::debug;

pub struct OutputRenderer {
    dictionary: Arc<ReplacementDictionary>,
}

impl OutputRenderer {
    pub fn new(dictionary: Arc<ReplacementDictionary>) -> Self {
        Self { dictionary }
    }

    /// Render summaries in the mode and format selected by `options`.
    ///
    /// The dictionary legend leads text output whenever compression is on.
    pub fn render(&self, summaries: &[DomainSummary], options: &RenderOptions) -> Result<String> {
        debug!(mode = ?options.mode, format = %options.format, summaries = summaries.len(), "rendering");
        match options.format {
            OutputFormat::Json => json::render(summaries, options.mode),
            OutputFormat::Text => {
                let mut out = String::new();
                if options.compress {
                    out.push_str(&text::legend(&self.dictionary));
                }
                out.push_str(&text::render(summaries, options.mode));
                Ok(out)
            }
        }
    }
}

impl Default for OutputRenderer {
    fn default() -> Self {
        Self::new(ReplacementDictionary::bian())
    }
}
