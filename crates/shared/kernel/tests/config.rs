use config::Map;
use emapi_kernel::config::{ConfigError, load_config, load_config_with_env};
use emapi_kernel::domain::config::ApiConfig;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> Map<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn file_values_are_loaded() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
        [server]
        port = 9000

        [docs]
        spec_path = "/openapi.json"
        "#,
    )?;

    let cfg: ApiConfig = load_config_with_env(Some(&path), Some(Map::new()))?;
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.docs.spec_path, "/openapi.json");
    assert_eq!(cfg.docs.ui_path, "/swagger-ui");
    Ok(())
}

#[test]
fn environment_overrides_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = 9000\n")?;

    let overrides = env(&[("EMAPI__SERVER__PORT", "9100"), ("EMAPI__DOCS__ENABLED", "false")]);
    let cfg: ApiConfig = load_config_with_env(Some(&path), Some(overrides))?;

    assert_eq!(cfg.server.port, 9100);
    assert!(!cfg.docs.enabled);
    Ok(())
}

#[test]
fn unprefixed_variables_are_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "")?;

    let cfg: ApiConfig =
        load_config_with_env(Some(&path), Some(env(&[("SERVER__PORT", "1")])))?;
    assert_eq!(cfg.server.port, 8080);
    Ok(())
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    let err = load_config::<ApiConfig>(Some(&missing)).expect_err("file is required");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
}

#[test]
fn malformed_values_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(&path, "[server]\nport = \"not-a-port\"\n")?;

    let err = load_config_with_env::<ApiConfig>(Some(&path), Some(Map::new()))
        .expect_err("port must be numeric");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}

#[test]
fn config_source_defaults_to_optional_server_file() {
    use emapi_kernel::config::{DEFAULT_CONFIG_FILE, config_source};
    use std::path::PathBuf;

    assert_eq!(config_source(None::<&str>), (PathBuf::from(DEFAULT_CONFIG_FILE), false));
    assert_eq!(config_source(Some("conf/local.toml")), (PathBuf::from("conf/local.toml"), true));
}
