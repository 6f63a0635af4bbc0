use anyhow::{Context, Result};
use bian_compactor::{ReplacementDictionary, TermCompressor};
use bian_core::SummarizerConfig;
use bian_parser::{DirectorySummarizer, SummaryExtractor};
use bian_render::{filter_by_domain, OutputFormat, OutputMode, OutputRenderer, RenderOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bian2context", version)]
#[command(about = "Compact BIAN OpenAPI context extractor", long_about = None)]
#[command(after_help = "Without --only-* flags a full summary (service domain, entities and events) is generated.\n\
--compress also applies to the --only-* modes. Without --output a default file name is used.")]
pub struct Cli {
    /// Directory containing .yaml, .yml or .json specifications
    pub directory: PathBuf,

    /// Output only the list of Service Domains
    #[arg(long)]
    pub only_domains: bool,

    /// Output only the Entities (per domain)
    #[arg(long)]
    pub only_entities: bool,

    /// Output only the Domain Events (per domain)
    #[arg(long)]
    pub only_events: bool,

    /// Apply abbreviations from the replacement dictionary
    #[arg(long)]
    pub compress: bool,

    /// Return the output in JSON format (alias of --format json)
    #[arg(long)]
    pub json: bool,

    /// Output format: txt | json
    #[arg(long, value_name = "FMT")]
    pub format: Option<OutputFormat>,

    /// Custom output file name
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep only Service Domains whose name contains this text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        match self.format {
            Some(format) => format,
            None if self.json => OutputFormat::Json,
            None => OutputFormat::Text,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        let mode = OutputMode::from_flags(self.only_domains, self.only_entities, self.only_events);
        RenderOptions::new(mode, self.output_format())
            .with_compress(self.compress)
            .with_filter(self.filter.clone())
            .with_output(self.output.clone())
    }

    pub fn summarizer_config(&self) -> SummarizerConfig {
        SummarizerConfig::new().with_compress(self.compress)
    }
}

/// Summarize, filter, render and write. Returns the written path.
pub fn run(cli: &Cli) -> Result<PathBuf> {
    let dictionary = ReplacementDictionary::bian();
    let extractor = SummaryExtractor::new(TermCompressor::new(dictionary.clone()));
    let summarizer = DirectorySummarizer::with_extractor(extractor, cli.summarizer_config());
    let options = cli.render_options();

    let summaries = summarizer
        .summarize(&cli.directory)
        .with_context(|| format!("Failed to summarize {}", cli.directory.display()))?;
    let summaries = filter_by_domain(summaries, options.filter.as_deref());

    let output = OutputRenderer::new(dictionary).render(&summaries, &options)?;
    let path = options.output_path();
    std::fs::write(&path, output)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), summaries = summaries.len(), "output written");
    Ok(path)
}
