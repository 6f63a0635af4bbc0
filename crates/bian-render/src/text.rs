//! Compact line format.

use bian_compactor::ReplacementDictionary;
use bian_core::DomainSummary;
use crate::mode::OutputMode;
use std::fmt::Write;

/// `#DICT` legend: `abbreviation=phrase;` pairs in dictionary order.
pub fn legend(dictionary: &ReplacementDictionary) -> String {
    let mut out = String::from("#DICT\n");
    for (phrase, abbreviation) in dictionary.iter() {
        let _ = write!(out, "{abbreviation}={phrase};");
    }
    out.push_str("\n\n");
    out
}

pub fn render(summaries: &[DomainSummary], mode: OutputMode) -> String {
    let mut out = format!("{}\n", mode.section_marker());
    match mode {
        OutputMode::Domains => {
            let mut lines: Vec<String> = summaries
                .iter()
                .map(|s| format!("SD={}", s.service_domain))
                .collect();
            lines.sort();
            out.push_str(&lines.join("\n"));
        }
        OutputMode::Full => {
            for s in summaries {
                push_domain(&mut out, s);
                push_entities(&mut out, s);
                push_events(&mut out, s);
                out.push('\n');
            }
        }
        OutputMode::Entities => {
            for s in summaries {
                push_domain(&mut out, s);
                push_entities(&mut out, s);
                out.push('\n');
            }
        }
        OutputMode::Events => {
            for s in summaries.iter().filter(|s| s.has_events()) {
                push_domain(&mut out, s);
                push_events(&mut out, s);
                out.push('\n');
            }
        }
    }
    out
}

fn push_domain(out: &mut String, summary: &DomainSummary) {
    let _ = writeln!(out, "SD={}", summary.service_domain);
}

fn push_entities(out: &mut String, summary: &DomainSummary) {
    for e in &summary.entities {
        let _ = writeln!(out, "E={}:{}", e.name, e.description);
    }
}

fn push_events(out: &mut String, summary: &DomainSummary) {
    for de in &summary.domain_events {
        let _ = writeln!(out, "DE={de}");
    }
}
