use super::*;
use tempfile::TempDir;

#[test]
fn test_parse_empty_config_uses_defaults() {
    let config = LoadConfig::from_yaml("{}").unwrap();
    assert_eq!(config, LoadConfig::default());
    assert_eq!(config.delimiter, ',');
    assert!(!config.overwrite);
    assert!(config.fill_construct_cost);
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
delimiter: ";"
overwrite: true
fill_construct_cost: false
"#;
    let config = LoadConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.delimiter, ';');
    assert!(config.overwrite);
    assert!(!config.fill_construct_cost);
    assert_eq!(config.delimiter_byte().unwrap(), b';');
}

#[test]
fn test_unknown_field_rejected() {
    let err = LoadConfig::from_yaml("chunk_size: 10").unwrap_err();
    assert!(matches!(err, CoreError::YamlParse(_)));
}

#[test]
fn test_non_ascii_delimiter_rejected() {
    let err = LoadConfig::from_yaml("delimiter: \"§\"").unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_quote_delimiter_rejected() {
    let err = LoadConfig::from_yaml("delimiter: '\"'").unwrap_err();
    assert!(err.to_string().contains("[P009]"));
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ppts.yml");
    std::fs::write(&path, "delimiter: \"|\"\n").unwrap();

    let config = LoadConfig::load(&path).unwrap();
    assert_eq!(config.delimiter, '|');
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = LoadConfig::load(&dir.path().join("absent.yml")).unwrap_err();
    assert!(matches!(err, CoreError::IoWithPath { .. }));
}

#[test]
fn test_load_or_default_without_path() {
    assert_eq!(
        LoadConfig::load_or_default(None).unwrap(),
        LoadConfig::default()
    );
}
