// tests/unit_config.rs
use ruffsight_core::config::{Config, Preferences};

#[test]
fn test_defaults() {
    let prefs = Preferences::default();
    assert!(prefs.color);
    assert_eq!(prefs.format, "terminal");
    assert_eq!(prefs.max_rows, 0);
}

#[test]
fn test_parse_toml_overrides() {
    let mut config = Config::new();
    config.parse_toml("[preferences]\ncolor = false\nformat = \"json\"\nmax_rows = 25\n");
    assert!(!config.preferences.color);
    assert_eq!(config.preferences.format, "json");
    assert_eq!(config.preferences.max_rows, 25);
}

#[test]
fn test_parse_toml_partial_keeps_defaults() {
    let mut config = Config::new();
    config.parse_toml("[preferences]\nmax_rows = 10\n");
    assert!(config.preferences.color);
    assert_eq!(config.preferences.format, "terminal");
    assert_eq!(config.preferences.max_rows, 10);
}

#[test]
fn test_parse_toml_malformed_is_ignored() {
    let mut config = Config::new();
    config.parse_toml("this is not toml [[[");
    assert!(config.preferences.color);
    assert_eq!(config.preferences.max_rows, 0);
}

#[test]
fn test_parse_toml_empty_document() {
    let mut config = Config::new();
    config.parse_toml("");
    assert_eq!(config.preferences.format, "terminal");
}
