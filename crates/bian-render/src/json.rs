//! JSON output, pretty-printed with two-space indentation.

use bian_core::{DomainSummary, Entity, Result};
use crate::mode::OutputMode;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntitiesView<'a> {
    service_domain: &'a str,
    entities: &'a [Entity],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventsView<'a> {
    service_domain: &'a str,
    domain_events: &'a [String],
}

pub fn render(summaries: &[DomainSummary], mode: OutputMode) -> Result<String> {
    let out = match mode {
        OutputMode::Full => serde_json::to_string_pretty(summaries)?,
        OutputMode::Domains => {
            let domains: Vec<&str> = summaries.iter().map(|s| s.service_domain.as_str()).collect();
            serde_json::to_string_pretty(&domains)?
        }
        OutputMode::Entities => {
            let views: Vec<EntitiesView<'_>> = summaries
                .iter()
                .map(|s| EntitiesView { service_domain: &s.service_domain, entities: &s.entities })
                .collect();
            serde_json::to_string_pretty(&views)?
        }
        OutputMode::Events => {
            let views: Vec<EventsView<'_>> = summaries
                .iter()
                .filter(|s| s.has_events())
                .map(|s| EventsView { service_domain: &s.service_domain, domain_events: &s.domain_events })
                .collect();
            serde_json::to_string_pretty(&views)?
        }
    };
    Ok(out)
}
