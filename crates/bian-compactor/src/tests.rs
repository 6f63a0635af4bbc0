use crate::*;
use crate::whitespace;
use serde_json::json;
use std::sync::Arc;

fn compressor() -> TermCompressor {
    TermCompressor::default()
}

// ========== Whitespace ==========

#[test]
fn test_ws_collapse_runs() {
    assert_eq!(whitespace::collapse("  a \t\n  b   c "), "a b c");
}

#[test]
fn test_ws_empty() {
    assert_eq!(whitespace::collapse(""), "");
    assert_eq!(whitespace::collapse(" \n\t "), "");
}

// ========== Dictionary ==========

#[test]
fn test_dict_declared_order() {
    let dict = ReplacementDictionary::bian();
    let first: Vec<_> = dict.iter().take(3).collect();
    assert_eq!(first, vec![("Service Domain", "SD"), ("Description", "D"), ("Entity", "E")]);
    assert_eq!(dict.len(), BIAN_TERMS.len());
    let (last_phrase, last_abbr) = dict.iter().last().unwrap();
    assert_eq!((last_phrase, last_abbr), ("Relationship", "Rel"));
}

#[test]
fn test_dict_shared_instance() {
    let a = ReplacementDictionary::bian();
    let b = ReplacementDictionary::bian();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_dict_case_insensitive_global() {
    let dict = ReplacementDictionary::new([("Account", "Acct")]).unwrap();
    assert_eq!(dict.apply("account ACCOUNT Account"), "Acct Acct Acct");
}

#[test]
fn test_dict_matches_inside_words() {
    let dict = ReplacementDictionary::new([("Design", "Des")]).unwrap();
    assert_eq!(dict.apply("Designation"), "Desation");
}

#[test]
fn test_dict_compounding_preserved() {
    assert_eq!(compressor().compress("Operations", true), "Opss");
    assert_eq!(compressor().compress("Operation", true), "Ops");
}

#[test]
fn test_dict_phrase_is_literal() {
    let dict = ReplacementDictionary::new([("a.b (c)", "X"), ("$", "D")]).unwrap();
    assert_eq!(dict.apply("a.b (c) aXb (c)"), "X aXb (c)");
    assert_eq!(dict.apply("cost $5"), "cost D5");
}

#[test]
fn test_dict_abbreviation_is_literal() {
    let dict = ReplacementDictionary::new([("price", "$1")]).unwrap();
    assert_eq!(dict.apply("price list"), "$1 list");
}

#[test]
fn test_dict_empty() {
    let dict = ReplacementDictionary::new(Vec::<(&str, &str)>::new()).unwrap();
    assert!(dict.is_empty());
    assert_eq!(dict.apply("Service Domain"), "Service Domain");
}

#[test]
fn test_dict_does_not_touch_whitespace() {
    let dict = ReplacementDictionary::new([("Account", "Acct")]).unwrap();
    assert_eq!(dict.apply("  Account  x "), "  Acct  x ");
}

// ========== TermCompressor ==========

#[test]
fn test_compress_service_domain() {
    assert_eq!(compressor().compress("Service Domain", true), "SD");
}

#[test]
fn test_compress_disabled_keeps_terms() {
    assert_eq!(compressor().compress("Service Domain", false), "Service Domain");
}

#[test]
fn test_compress_disabled_collapses_whitespace() {
    assert_eq!(compressor().compress("  Service \n\n Domain\t", false), "Service Domain");
}

#[test]
fn test_compress_no_phrase_only_normalizes() {
    let s = "  hello \t  world ";
    assert_eq!(compressor().compress(s, true), "hello world");
}

#[test]
fn test_compress_title() {
    assert_eq!(compressor().compress("Account Reconciliation", true), "Acct Recon");
    assert_eq!(compressor().compress("Card Operations", true), "Card Opss");
}

#[test]
fn test_compress_event_name() {
    assert_eq!(
        compressor().compress("AccountResolution/Created.publish", true),
        "AcctRes/Crtd.publish"
    );
}

#[test]
fn test_compress_description() {
    assert_eq!(
        compressor().compress("A course of action for doing Account Resolution Workstep", true),
        "A course of action for doing Acct Res WS"
    );
}

#[test]
fn test_compress_twice_is_stable_on_typical_output() {
    let c = compressor();
    let once = c.compress("Customer Product and Payment Directory", true);
    assert_eq!(once, "Cust Prod and Pay Dir");
    assert_eq!(c.compress(&once, true), once);
}

#[test]
fn test_compress_value_non_string() {
    let c = compressor();
    assert_eq!(c.compress_value(Some(&json!(42)), true), "");
    assert_eq!(c.compress_value(Some(&json!(null)), false), "");
    assert_eq!(c.compress_value(None, true), "");
    assert_eq!(c.compress_value(Some(&json!(" Branch ")), true), "Br");
}

#[test]
fn test_compress_custom_dictionary() {
    let dict = ReplacementDictionary::new([("foo", "f")]).unwrap();
    let c = TermCompressor::new(Arc::new(dict));
    assert_eq!(c.compress("Foo  bar", true), "f bar");
    assert_eq!(c.dictionary().len(), 1);
}
