use gavel_core::config::{GlobalConfig, OutputFormat};
use tempfile::TempDir;

#[test]
fn test_global_config_defaults() {
    let config = GlobalConfig::default();
    assert!(!config.catalog.deny_dynamic);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.export_file, "versions.json");
}

#[test]
fn test_global_config_export_file_default_from_toml() {
    let config: GlobalConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.export_file, "versions.json");
}

#[test]
fn test_global_config_parse_from_toml() {
    let toml = r#"
[catalog]
deny-dynamic = true

[output]
format = "json"
export-file = "build/versions.json"
"#;
    let config: GlobalConfig = toml::from_str(toml).unwrap();
    assert!(config.catalog.deny_dynamic);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.export_file, "build/versions.json");
}

#[test]
fn test_load_from_missing_file_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = GlobalConfig::load_from(&tmp.path().join("config.toml")).unwrap();
    assert!(!config.catalog.deny_dynamic);
}

#[test]
fn test_load_from_invalid_file_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
    let err = GlobalConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().starts_with("Config error:"), "got: {err}");
}

#[test]
fn test_default_path_is_config_toml() {
    assert!(GlobalConfig::default_path().ends_with("config.toml"));
}
