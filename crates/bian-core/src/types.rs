use serde::{Deserialize, Serialize};

/// Service domain reported for a file that failed to parse.
pub const INVALID_DOCUMENT: &str = "Invalid YAML/JSON";

/// Title used when a document has no `info.title`.
pub const UNKNOWN_DOMAIN: &str = "Unknown";

/// A named message definition carried by a service domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub description: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Normalized summary of one specification document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    pub service_domain: String,
    pub entities: Vec<Entity>,
    pub domain_events: Vec<String>,
}

impl DomainSummary {
    pub fn new(
        service_domain: impl Into<String>,
        entities: Vec<Entity>,
        domain_events: Vec<String>,
    ) -> Self {
        Self {
            service_domain: service_domain.into(),
            entities,
            domain_events,
        }
    }

    /// Sentinel summary for a malformed document.
    pub fn invalid() -> Self {
        Self::new(INVALID_DOCUMENT, Vec::new(), Vec::new())
    }

    pub fn is_invalid(&self) -> bool {
        self.service_domain == INVALID_DOCUMENT
            && self.entities.is_empty()
            && self.domain_events.is_empty()
    }

    pub fn has_events(&self) -> bool {
        !self.domain_events.is_empty()
    }
}
