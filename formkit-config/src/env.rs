// Environment variable loading

use crate::Result;
use std::collections::HashMap;
use std::env;

/// Reads configuration keys from the process environment.
///
/// With a prefix such as `FORMKIT`, only `FORMKIT_*` variables are picked up
/// and `FORMKIT_BASE_URL` becomes the key `base_url`.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Collect matching variables as lowercase keys.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        Ok(self.collect(env::vars()))
    }

    fn collect(&self, vars: impl Iterator<Item = (String, String)>) -> HashMap<String, String> {
        vars.filter_map(|(key, value)| self.strip(&key).map(|k| (k.to_lowercase(), value)))
            .collect()
    }

    fn strip<'a>(&self, key: &'a str) -> Option<&'a str> {
        match &self.prefix {
            Some(prefix) => key
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
                .filter(|rest| !rest.is_empty()),
            None => Some(key),
        }
    }

    /// Read a single variable; `key` is uppercased and prefixed.
    pub fn load_var(&self, key: &str) -> Result<String> {
        Ok(env::var(self.full_key(key))?)
    }

    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
