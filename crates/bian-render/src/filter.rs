use bian_core::DomainSummary;

/// Keep summaries whose service domain contains `needle`, ignoring case.
///
/// A missing or empty filter keeps everything.
pub fn filter_by_domain(summaries: Vec<DomainSummary>, needle: Option<&str>) -> Vec<DomainSummary> {
    let needle = match needle {
        Some(n) if !n.is_empty() => n.to_lowercase(),
        _ => return summaries,
    };
    summaries
        .into_iter()
        .filter(|s| s.service_domain.to_lowercase().contains(&needle))
        .collect()
}
