//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

fn clear_env() {
    env::remove_var("MODREG_CONFIG");
    env::remove_var("MODREG_SERVER");
    env::remove_var("MODREG_PAGE_SIZE");
}

// ===== Paths =====

#[test]
fn default_config_path_points_into_modreg_dir() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("modreg") && path_str.ends_with("config.toml"),
        "got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_modreg_log() {
    let path = default_log_path();
    assert!(path.to_string_lossy().ends_with("modreg.log"), "got: {:?}", path);
}

// ===== File loading =====

#[test]
fn missing_file_is_not_an_error() {
    let result = load_config_file("/nonexistent/path/to/modreg.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn parses_all_fields() {
    let path = write_temp(
        "modreg_test_full.toml",
        r#"
server_url = "https://modules.example.org"
page_size = 25
request_timeout_secs = 5
log_file_path = "/tmp/modreg-test.log"
"#,
    );

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(
        config.server_url.as_deref(),
        Some("https://modules.example.org")
    );
    assert_eq!(config.page_size, Some(25));
    assert_eq!(config.request_timeout_secs, Some(5));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/modreg-test.log"))
    );

    fs::remove_file(path).ok();
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = write_temp("modreg_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&path) {
        Err(ConfigError::ParseError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(path).ok();
}

#[test]
fn unknown_fields_are_rejected() {
    let path = write_temp("modreg_test_unknown.toml", "theme = \"dark\"\n");
    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));
    fs::remove_file(path).ok();
}

#[test]
fn partial_file_keeps_other_fields_unset() {
    let path = write_temp("modreg_test_partial.toml", "page_size = 7\n");
    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.page_size, Some(7));
    assert_eq!(config.server_url, None);
    fs::remove_file(path).ok();
}

// ===== Precedence =====

#[test]
#[serial]
fn explicit_path_beats_env_var() {
    let explicit = write_temp("modreg_test_explicit.toml", "page_size = 3\n");
    let from_env = write_temp("modreg_test_env.toml", "page_size = 4\n");
    env::set_var("MODREG_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.page_size, Some(3));

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.page_size, Some(4));

    clear_env();
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
fn merge_without_file_yields_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.page_size, 15);
    assert_eq!(resolved.server_url, DEFAULT_SERVER_URL);
    assert_eq!(resolved.request_timeout().as_secs(), 30);
}

#[test]
fn merge_takes_set_fields_only() {
    let file = ConfigFile {
        server_url: Some("http://registry:9000".to_string()),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.server_url, "http://registry:9000");
    assert_eq!(resolved.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
#[serial]
fn env_overrides_file_values() {
    clear_env();
    env::set_var("MODREG_SERVER", "http://from-env");
    env::set_var("MODREG_PAGE_SIZE", "40");

    let base = merge_config(Some(ConfigFile {
        server_url: Some("http://from-file".to_string()),
        page_size: Some(10),
        ..ConfigFile::default()
    }));
    let resolved = apply_env_overrides(base).unwrap();
    assert_eq!(resolved.server_url, "http://from-env");
    assert_eq!(resolved.page_size, 40);

    clear_env();
}

#[test]
#[serial]
fn non_numeric_page_size_env_is_rejected() {
    clear_env();
    env::set_var("MODREG_PAGE_SIZE", "lots");

    let err = apply_env_overrides(ResolvedConfig::default()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "MODREG_PAGE_SIZE"));

    clear_env();
}

#[test]
fn cli_overrides_win() {
    let base = ResolvedConfig {
        server_url: "http://from-env".to_string(),
        page_size: 40,
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(base.clone(), Some("http://cli".to_string()), Some(5));
    assert_eq!(resolved.server_url, "http://cli");
    assert_eq!(resolved.page_size, 5);

    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
fn validation_rejects_zero_page_size() {
    let config = ResolvedConfig {
        page_size: 0,
        ..ResolvedConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for page_size: must be at least 1");
    assert!(ResolvedConfig::default().validate().is_ok());
}
