//! Configuration management for formkit.
//!
//! A [`ConfigManager`] is a flat key/value store filled from environment
//! variables, `.env` files and JSON/TOML files. Later loads override earlier
//! ones. Values are stored as JSON and converted on read.
//!
//! ```
//! use formkit_config::ConfigManager;
//!
//! let config = ConfigManager::new();
//! config.set("base_url", "https://api.example.com").unwrap();
//! config.set("timeout_secs", 10).unwrap();
//!
//! let base: String = config.get("base_url").unwrap();
//! assert_eq!(base, "https://api.example.com");
//! assert_eq!(config.get_or("retries", 3u32), 3);
//! ```

pub mod env;
pub mod error;
pub mod loader;

pub use env::EnvLoader;
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, FileFormat};

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Shared configuration store.
#[derive(Clone, Default)]
pub struct ConfigManager {
    values: Arc<RwLock<HashMap<String, Value>>>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager whose environment loading only reads `PREFIX_*`
    /// variables.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            values: Arc::default(),
            env_prefix: Some(prefix.into()),
        }
    }

    /// Load environment variables as string values.
    pub fn load_env(&self) -> Result<()> {
        let vars = EnvLoader::new(self.env_prefix.clone()).load()?;

        let mut values = self.values.write();
        for (key, value) in vars {
            values.insert(key, Value::String(value));
        }

        Ok(())
    }

    /// Load a `.env` file into the process environment, then the environment
    /// into the store. A missing default `.env` is not an error.
    pub fn load_dotenv(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                dotenvy::from_path(path)?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        self.load_env()
    }

    /// Merge the top-level keys of a configuration file.
    pub fn load_file(&self, path: impl AsRef<Path>, format: FileFormat) -> Result<()> {
        let data = ConfigLoader::new(format).load_file(path)?;
        self.merge_value(data)
    }

    /// Like [`load_file`](Self::load_file), detecting the format from the
    /// extension.
    pub fn load_file_auto(&self, path: impl AsRef<Path>) -> Result<()> {
        let format = FileFormat::detect(path.as_ref())?;
        self.load_file(path, format)
    }

    fn merge_value(&self, data: Value) -> Result<()> {
        let Value::Object(map) = data else {
            return Err(ConfigError::ParseError(
                "configuration root must be a table".to_string(),
            ));
        };

        let mut values = self.values.write();
        values.extend(map);
        Ok(())
    }

    pub fn set<T: serde::Serialize>(&self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| ConfigError::SerializationError {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        self.values.write().insert(key.to_string(), value);
        Ok(())
    }

    /// Read a typed value.
    ///
    /// String values that do not deserialize directly are parsed as JSON, so
    /// `FORMKIT_TIMEOUT_SECS=5` reads back as a number.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .values
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        let fallback = match &value {
            Value::String(text) => serde_json::from_str::<Value>(text).ok(),
            _ => None,
        };

        serde_json::from_value(value).or_else(|e| {
            fallback
                .and_then(|parsed| serde_json::from_value(parsed).ok())
                .ok_or_else(|| ConfigError::DeserializationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })
        })
    }

    /// Read a typed value, treating a missing key as `None`.
    pub fn get_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    pub fn get_string(&self, key: &str) -> Result<String> {
        self.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.read().contains_key(key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.values.read().keys().cloned().collect()
    }

    /// Copy every key of `other` into this manager, overriding existing keys.
    pub fn merge(&self, other: &ConfigManager) {
        let theirs = other.values.read().clone();
        self.values.write().extend(theirs);
    }
}
