use crate::config::load_config;
use crate::config::load_config_from_str;
use crate::config::ConfigError;
use crate::config::FilterConfig;
use crate::config::FilterSpec;
use crate::filter_schema_str;
use crate::DeclarationKind;
use crate::FilterAction;
use crate::FilterSchemaOptions;
use crate::Matcher;
use std::path::Path;

const CONFIG_JSON: &str = r#"{
  "filters": [
    { "type": "type", "fieldName": "^id$", "label": "no ids" },
    { "type": "input", "name": "^Create", "fieldName": ["createdAt", "updatedAt"], "invert": true },
    { "name": ["Album"], "add": "  extra: Boolean" },
    { "line": "String", "except": "title", "transformField": { "prepend": "  # text" } }
  ],
  "descriptions": { "type": { "Album": { "__node": "An album, really" } } },
  "removeCommaInDescription": false
}"#;

fn parse_config(contents: &str) -> FilterConfig {
    load_config_from_str(contents, Path::new("filters.json")).unwrap()
}

#[test]
fn parses_filter_specs() {
    let config = parse_config(CONFIG_JSON);

    assert_eq!(config.filters.len(), 4);
    assert!(!config.remove_comma_in_description);
    assert_eq!(config.filters[0], FilterSpec {
        field_name: Some(Matcher::pattern("^id$").unwrap()),
        kind: Some(DeclarationKind::Type),
        label: Some("no ids".to_string()),
        ..FilterSpec::default()
    });
    assert_eq!(config.filters[1].field_name, Some(Matcher::exact(["createdAt", "updatedAt"])));
    assert!(config.filters[1].invert);
    assert_eq!(config.filters[2].add.as_deref(), Some("  extra: Boolean"));
    assert_eq!(
        config.descriptions.node(DeclarationKind::Type, "Album"),
        Some("An album, really"),
    );
}

#[test]
fn empty_config_uses_defaults() {
    let config = parse_config("{}");

    assert_eq!(config, FilterConfig::default());
    assert!(config.remove_comma_in_description);
    assert!(config.descriptions.is_empty());
}

#[test]
fn specs_become_filters_in_order() {
    let (filters, options) = parse_config(CONFIG_JSON).into_pipeline();

    assert_eq!(filters.len(), 4);
    assert!(matches!(filters[0].action, FilterAction::Remove { invert: false, .. }));
    assert_eq!(filters[0].label.as_deref(), Some("no ids"));
    assert!(matches!(filters[1].action, FilterAction::Remove { invert: true, .. }));
    assert_eq!(filters[1].kind, Some(DeclarationKind::Input));
    // The add-only spec contributes no removal.
    assert!(matches!(filters[2].action, FilterAction::Add { .. }));
    assert!(matches!(filters[3].action, FilterAction::Rewrite { .. }));
    assert!(!options.strip_commas);
    assert!(!options.descriptions.is_empty());
}

#[test]
fn add_with_field_test_also_removes() {
    let spec = FilterSpec {
        add: Some("  extra: Boolean".to_string()),
        field_name: Some(Matcher::exact(["id"])),
        ..FilterSpec::default()
    };

    let filters = spec.into_filters();

    assert_eq!(filters.len(), 2);
    assert!(matches!(filters[0].action, FilterAction::Add { .. }));
    assert!(matches!(filters[1].action, FilterAction::Remove { .. }));
}

#[test]
fn configured_pipeline_filters_a_schema() {
    let (filters, serialize) = parse_config(CONFIG_JSON).into_pipeline();
    let options = FilterSchemaOptions {
        serialize,
        ..FilterSchemaOptions::default()
    };

    let output = filter_schema_str("\
type Album {
  id: ID
  title: String
  name: String
}
input CreateAlbum {
  createdAt: String
  name: String
}
", &filters, &options).unwrap();

    assert_eq!(output, "\
\"\"\" An album, really\"\"\"
type Album {
  extra: Boolean
  title: String
  \"\"\"  text\"\"\"
  name: String
}

input CreateAlbum {
  \"\"\"  text\"\"\"
  createdAt: String
}
");
}

#[test]
fn invalid_pattern_is_reported_with_the_path() {
    let err = load_config_from_str(
        r#"{ "filters": [{ "fieldName": "(" }] }"#,
        Path::new("filters.json"),
    ).unwrap_err();

    let ConfigError::Invalid { message, path } = &err else {
        panic!("expected an invalid-config error, got {err:?}");
    };
    assert_eq!(path, Path::new("filters.json"));
    assert!(message.contains("invalid pattern"), "{message}");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = load_config_from_str(
        r#"{ "filters": [{ "feildName": "id" }] }"#,
        Path::new("filters.json"),
    ).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn unknown_kind_is_rejected() {
    let err = load_config_from_str(
        r#"{ "filters": [{ "type": "union" }] }"#,
        Path::new("filters.json"),
    ).unwrap_err();

    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn load_config_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filters.json");
    std::fs::write(&path, CONFIG_JSON).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.filters.len(), 4);

    let missing = load_config(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, ConfigError::Read { .. }));
}
