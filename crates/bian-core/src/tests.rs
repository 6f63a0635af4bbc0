use crate::collate::locale_cmp;
use crate::document::{is_truthy, to_text, Node};
use crate::*;
use serde_json::json;
use std::cmp::Ordering;

// ========== Types ==========

#[test]
fn test_invalid_summary_sentinel() {
    let s = DomainSummary::invalid();
    assert_eq!(s.service_domain, "Invalid YAML/JSON");
    assert!(s.entities.is_empty());
    assert!(s.domain_events.is_empty());
    assert!(s.is_invalid());
}

#[test]
fn test_summary_serializes_camel_case() {
    let s = DomainSummary::new(
        "Card Operations",
        vec![Entity::new("CardAuthorization", "Authorize card payments")],
        vec!["CardAuthorization/Updated.publish".into()],
    );
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["serviceDomain"], "Card Operations");
    assert_eq!(v["entities"][0]["name"], "CardAuthorization");
    assert_eq!(v["domainEvents"][0], "CardAuthorization/Updated.publish");
}

#[test]
fn test_has_events() {
    let s = DomainSummary::new("X", vec![], vec![]);
    assert!(!s.has_events());
    assert!(!s.is_invalid());
}

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let cfg = SummarizerConfig::default();
    assert!(!cfg.compress);
    assert!(cfg.is_eligible("a.yaml"));
    assert!(cfg.is_eligible("a.yml"));
    assert!(cfg.is_eligible("a.json"));
    assert!(!cfg.is_eligible("a.txt"));
}

#[test]
fn test_config_suffix_is_case_sensitive() {
    let cfg = SummarizerConfig::default();
    assert!(!cfg.is_eligible("A.YAML"));
    assert!(!cfg.is_eligible("a.Json"));
}

#[test]
fn test_config_builder() {
    let cfg = SummarizerConfig::new().with_compress(true).with_extensions([".yaml"]);
    assert!(cfg.compress);
    assert!(!cfg.is_eligible("a.json"));
}

// ========== Errors ==========

#[test]
fn test_parse_error_is_recoverable() {
    let err = BianError::Parse {
        path: "bad.yaml".into(),
        format: ".yaml".into(),
        message: "oops".into(),
    };
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("bad.yaml"));
}

#[test]
fn test_io_error_is_fatal() {
    let err = BianError::FileRead {
        path: "x.yaml".into(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(!err.is_recoverable());
}

#[test]
fn test_serialization_error_converts_and_is_fatal() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: BianError = source.into();
    assert!(matches!(err, BianError::Serialization(_)));
    assert!(!err.is_recoverable());
    assert!(err.to_string().starts_with("Serialization error:"));
}

// ========== Document navigation ==========

#[test]
fn test_node_path_present() {
    let doc = json!({"info": {"title": "Account Reconciliation"}});
    assert_eq!(Node::root(&doc).path(&["info", "title"]).as_str(), Some("Account Reconciliation"));
}

#[test]
fn test_node_path_through_scalar_and_null() {
    let doc = json!({"info": "plain", "components": null});
    assert_eq!(Node::root(&doc).path(&["info", "title"]).value(), None);
    assert!(Node::root(&doc).path(&["components", "messages"]).entries().is_empty());
}

#[test]
fn test_node_entries_in_document_order() {
    let doc = json!({"messages": {"B": 1, "A": 2}});
    let keys: Vec<String> = Node::root(&doc).get("messages").entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["B", "A"]);
}

#[test]
fn test_node_entries_of_sequence_use_indices() {
    let doc = json!([{"a": 1}, {"b": 2}]);
    let keys: Vec<String> = Node::root(&doc).entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["0", "1"]);
}

#[test]
fn test_truthiness() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!("")));
    assert!(is_truthy(&json!(" ")));
    assert!(is_truthy(&json!({})));
    assert!(is_truthy(&json!([])));
    assert!(is_truthy(&json!(3.5)));
}

#[test]
fn test_to_text() {
    assert_eq!(to_text(&json!(5)), "5");
    assert_eq!(to_text(&json!(2.0)), "2");
    assert_eq!(to_text(&json!(2.5)), "2.5");
    assert_eq!(to_text(&json!(true)), "true");
    assert_eq!(to_text(&json!(["a", null, 1])), "a,,1");
    assert_eq!(to_text(&json!({"k": "v"})), "[object Object]");
}

// ========== Collation ==========

#[test]
fn test_locale_cmp_ignores_case_at_first_level() {
    assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
    assert_eq!("apple".cmp("Banana"), Ordering::Greater);
}

#[test]
fn test_locale_cmp_lowercase_first_on_tie() {
    assert_eq!(locale_cmp("a", "A"), Ordering::Less);
    assert_eq!(locale_cmp("Party", "party"), Ordering::Greater);
}

#[test]
fn test_locale_cmp_accents() {
    assert_eq!(locale_cmp("Éclair", "Zeta"), Ordering::Less);
    assert_eq!(locale_cmp("e", "é"), Ordering::Less);
    assert_eq!(locale_cmp("é", "f"), Ordering::Less);
}

#[test]
fn test_locale_cmp_punctuation_and_digits_before_letters() {
    assert_eq!(locale_cmp("_Base", "Account"), Ordering::Less);
    assert_eq!(locale_cmp("9Lives", "Account"), Ordering::Less);
    assert_eq!(locale_cmp("Account", "Account"), Ordering::Equal);
}
