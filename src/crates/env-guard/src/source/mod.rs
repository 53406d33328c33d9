//! Environment sources
//!
//! Accessors never touch `std::env` directly; they read through an
//! [`EnvSource`]. [`SystemEnv`] is the process environment, [`MapEnv`] is a
//! fixed in-memory table for tests and for callers that assemble their
//! configuration from somewhere else.

use std::collections::HashMap;
use std::env::{self, VarError};

/// Read-only view of an environment
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site if you
/// share a source between threads.
pub trait EnvSource {
    /// Look up `key`, mirroring the contract of [`std::env::var`]
    fn var(&self, key: &str) -> Result<String, VarError>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

/// In-memory environment table
///
/// # Example
///
/// ```rust
/// use env_guard::{Env, MapEnv};
///
/// let env = Env::new(MapEnv::new().with("PORT", "8080"));
/// assert_eq!(env.required_int("PORT", &[]), 8080);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MapEnv::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a variable
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegation() {
        let system_env = SystemEnv;
        let std_result = std::env::var("PATH");
        let provider_result = system_env.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_system_env_missing() {
        let result = SystemEnv.var("ENV_GUARD_TEST_MISSING_VAR_12345");
        assert_eq!(result, Err(VarError::NotPresent));
    }

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("HOST", "localhost").with("EMPTY", "");

        assert_eq!(env.var("HOST").unwrap(), "localhost");
        assert_eq!(env.var("EMPTY").unwrap(), "");
        assert_eq!(env.var("MISSING"), Err(VarError::NotPresent));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_map_env_set_and_remove() {
        let mut env = MapEnv::new();
        assert!(env.is_empty());

        env.set("KEY", "one");
        env.set("KEY", "two");
        assert_eq!(env.var("KEY").unwrap(), "two");

        assert_eq!(env.remove("KEY"), Some("two".to_string()));
        assert_eq!(env.var("KEY"), Err(VarError::NotPresent));
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("A").unwrap(), "1");
        assert_eq!(env.var("B").unwrap(), "2");
    }

    #[test]
    fn test_generic_function_with_source_reference() {
        fn get_value_or_default<E: EnvSource>(env: E, key: &str, default: &str) -> String {
            env.var(key).unwrap_or_else(|_| default.to_string())
        }

        let env = MapEnv::new().with("SET", "value");
        assert_eq!(get_value_or_default(&env, "SET", "default"), "value");
        assert_eq!(get_value_or_default(&env, "UNSET", "default"), "default");
    }
}
