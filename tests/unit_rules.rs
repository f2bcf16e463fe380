// tests/unit_rules.rs
use ruffsight_core::rules::{count, lookup, Fixability};

#[test]
fn test_lookup_known_rule() {
    let rule = lookup("E501").expect("E501 is bundled");
    assert_eq!(rule.name, "line-too-long");
    assert!(!rule.explanation.is_empty());
}

#[test]
fn test_lookup_unknown_rule_is_none() {
    assert!(lookup("ZZ999").is_none());
}

#[test]
fn test_docs_url_uses_rule_name() {
    let rule = lookup("F401").expect("F401 is bundled");
    assert_eq!(
        rule.docs_url(),
        "https://docs.astral.sh/ruff/rules/unused-import/"
    );
}

#[test]
fn test_fixability_mapping() {
    assert_eq!(
        lookup("E501").expect("bundled").fixability(),
        Fixability::NotFixable
    );
    assert_eq!(
        lookup("F401").expect("bundled").fixability(),
        Fixability::Sometimes
    );
    assert_eq!(
        lookup("I001").expect("bundled").fixability(),
        Fixability::Always
    );
}

#[test]
fn test_fixability_labels() {
    assert_eq!(Fixability::NotFixable.label(), "Fix is not available");
    assert_eq!(Fixability::Sometimes.label(), "Fix is sometimes available");
    assert_eq!(Fixability::Always.label(), "Fix is always available");
}

#[test]
fn test_table_is_populated() {
    assert!(count() > 0);
}
