//! Output modes, formats and default file names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which part of the summaries to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Domains, entities and events together.
    #[default]
    Full,
    Domains,
    Entities,
    Events,
}

impl OutputMode {
    /// Resolve `--only-*` flags. Domains wins over entities, entities over events.
    pub fn from_flags(only_domains: bool, only_entities: bool, only_events: bool) -> Self {
        if only_domains {
            Self::Domains
        } else if only_entities {
            Self::Entities
        } else if only_events {
            Self::Events
        } else {
            Self::Full
        }
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Full => "summary_compact",
            Self::Domains => "service_domains",
            Self::Entities => "entities",
            Self::Events => "events",
        }
    }

    pub fn section_marker(&self) -> &'static str {
        match self {
            Self::Full => "#DATA",
            Self::Domains => "#DOMAINS",
            Self::Entities => "#ENTITIES",
            Self::Events => "#EVENTS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Invalid format '{other}'. Use: txt | json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub mode: OutputMode,
    pub format: OutputFormat,
    pub compress: bool,
    pub filter: Option<String>,
    pub output: Option<PathBuf>,
}

impl RenderOptions {
    pub fn new(mode: OutputMode, format: OutputFormat) -> Self {
        Self { mode, format, ..Default::default() }
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_filter(mut self, filter: Option<String>) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Custom output path, or `<mode stem>.<format extension>`.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}.{}", self.mode.file_stem(), self.format.extension()))
        })
    }
}
