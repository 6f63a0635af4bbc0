//! SummaryExtractor — one specification document -> one [`DomainSummary`].

use bian_compactor::TermCompressor;
use bian_core::collate::locale_cmp;
use bian_core::document::{is_truthy, Node};
use bian_core::{Document, DomainSummary, Entity, Result, UNKNOWN_DOMAIN};
use crate::registry::ParserRegistry;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Summary text that marks an operation as a domain event, matched as-is.
const DOMAIN_EVENT_MARKER: &str = "Domain Event";

static RE_STATE_CHANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Created|Updated|Notify").unwrap());

/// Whether an operation summary describes a domain event.
pub fn is_domain_event(summary: Option<&str>) -> bool {
    summary.is_some_and(|s| s.contains(DOMAIN_EVENT_MARKER) || RE_STATE_CHANGE.is_match(s))
}

pub struct SummaryExtractor {
    registry: ParserRegistry,
    compressor: TermCompressor,
}

impl SummaryExtractor {
    pub fn new(compressor: TermCompressor) -> Self {
        Self {
            registry: ParserRegistry::new(),
            compressor,
        }
    }

    pub fn compressor(&self) -> &TermCompressor {
        &self.compressor
    }

    /// Parse `path` and summarize it.
    ///
    /// A file that fails to parse yields [`DomainSummary::invalid`]; only
    /// read failures are errors.
    pub fn extract(&self, path: &Path, compress: bool) -> Result<DomainSummary> {
        let summary = match self.registry.parse(path)? {
            Some(doc) => self.summarize(&doc, compress),
            None => DomainSummary::invalid(),
        };
        debug!(
            path = %path.display(),
            service_domain = %summary.service_domain,
            entities = summary.entities.len(),
            events = summary.domain_events.len(),
            "summarized"
        );
        Ok(summary)
    }

    /// Summarize an already parsed document.
    pub fn summarize(&self, doc: &Document, compress: bool) -> DomainSummary {
        if !is_truthy(doc) {
            return DomainSummary::invalid();
        }
        let root = Node::root(doc);
        DomainSummary::new(
            self.service_domain(root, compress),
            self.entities(root, compress),
            self.domain_events(root, compress),
        )
    }

    fn service_domain(&self, root: Node<'_>, compress: bool) -> String {
        let title = root.path(&["info", "title"]);
        if title.is_truthy() {
            self.compressor.compress_value(title.value(), compress)
        } else {
            self.compressor.compress(UNKNOWN_DOMAIN, compress)
        }
    }

    fn entities(&self, root: Node<'_>, compress: bool) -> Vec<Entity> {
        let mut entities: Vec<Entity> = root
            .path(&["components", "messages"])
            .entries()
            .into_iter()
            .filter_map(|(name, details)| {
                let description = details.get("description");
                if !description.is_truthy() {
                    return None;
                }
                let text = description.to_text()?;
                if text.trim().is_empty() {
                    return None;
                }
                Some(Entity::new(name, self.compressor.compress(&text, compress)))
            })
            .collect();
        entities.sort_by(|a, b| locale_cmp(&a.name, &b.name));
        entities
    }

    fn domain_events(&self, root: Node<'_>, compress: bool) -> Vec<String> {
        let mut events: Vec<String> = root
            .get("operations")
            .entries()
            .into_iter()
            .filter(|(_, op)| is_domain_event(op.get("summary").as_str()))
            .map(|(name, _)| self.compressor.compress(&name, compress))
            .collect();
        events.sort();
        events
    }
}

impl Default for SummaryExtractor {
    fn default() -> Self {
        Self::new(TermCompressor::default())
    }
}
