//! Integration tests for formkit-config

use formkit_config::*;
use std::collections::HashMap;
use std::io::Write;

#[test]
fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"base_url": "https://api.example.com", "headers": {{"X-Client": "formkit"}}}}"#
    )
    .unwrap();

    let manager = ConfigManager::new();
    manager.load_file_auto(file.path()).unwrap();

    assert_eq!(manager.get_string("base_url").unwrap(), "https://api.example.com");
    let headers: HashMap<String, String> = manager.get("headers").unwrap();
    assert_eq!(headers["X-Client"], "formkit");
}

#[test]
fn test_load_toml_file_overrides_earlier_values() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "timeout_secs = 20").unwrap();

    let manager = ConfigManager::new();
    manager.set("timeout_secs", 5).unwrap();
    manager.load_file(file.path(), FileFormat::Toml).unwrap();

    assert_eq!(manager.get::<u64>("timeout_secs").unwrap(), 20);
}

#[test]
fn test_missing_file() {
    let manager = ConfigManager::new();
    let result = manager.load_file("/nonexistent/formkit.json", FileFormat::Json);
    assert!(matches!(result, Err(ConfigError::Read { .. })));
}

#[test]
fn test_env_file_format() {
    let mut file = tempfile::Builder::new().suffix(".env").tempfile().unwrap();
    writeln!(file, "BASE_URL=https://env.example.com").unwrap();
    writeln!(file, "TIMEOUT_SECS=7").unwrap();

    let manager = ConfigManager::new();
    manager.load_file_auto(file.path()).unwrap();

    assert_eq!(manager.get_string("base_url").unwrap(), "https://env.example.com");
    assert_eq!(manager.get::<u64>("timeout_secs").unwrap(), 7);
}
