//! Environment variable accessors
//!
//! [`Env`] reads named variables from an [`EnvSource`], coerces them into a
//! target type and runs the caller's checks. Every accessor comes in two
//! forms:
//!
//! - `try_*` returns a [`Result`] so the caller decides what a failure means
//! - the plain form is fail-fast: on any failure it logs the error chain and
//!   panics with a one-line diagnostic naming the variable
//!
//! Checks on numeric accessors see the parsed value. Checks on URL accessors
//! see the raw string *before* parsing, so `not_empty` rejects a blank URL
//! without a parse attempt.
//!
//! # Example
//!
//! ```rust
//! use env_guard::validation::{non_negative, not_empty};
//! use env_guard::{Env, MapEnv};
//!
//! let env = Env::new(
//!     MapEnv::new()
//!         .with("APP_PORT", "8080")
//!         .with("APP_ENDPOINT", "https://example.com"),
//! )
//! .with_prefix("APP_");
//!
//! assert_eq!(env.required_int("port", &[non_negative]), 8080);
//! assert_eq!(env.required_url("endpoint", &[not_empty]).scheme(), "https");
//! assert!(env.try_required("host", &[]).is_err());
//! ```

use std::env::VarError;
use std::error::Error as StdError;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, error, trace};
use url::Url;

use crate::config::build_env_key;
use crate::error::{format_error_chain, report, EnvError, Result};
use crate::logging::redact;
use crate::source::{EnvSource, SystemEnv};
use crate::validation::{run_checks, Check};

/// Raw text is not one of the accepted boolean literals
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected one of true/false, t/f, 1/0")]
pub struct InvalidBool;

/// Parse a boolean literal, ignoring ASCII case
///
/// `true`, `t`, `1` are true; `false`, `f`, `0` are false. Surrounding
/// whitespace is not trimmed.
pub fn parse_bool(value: &str) -> std::result::Result<bool, InvalidBool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(true),
        "false" | "f" | "0" => Ok(false),
        _ => Err(InvalidBool),
    }
}

/// Raw text is not a float, or does not fit the requested width
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidFloat {
    #[error(transparent)]
    Syntax(#[from] ParseFloatError),

    /// Finite text that overflows to infinity
    #[error("number out of range")]
    OutOfRange,
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn parse_finite<T>(value: &str, is_infinite: fn(T) -> bool) -> std::result::Result<T, InvalidFloat>
where
    T: FromStr<Err = ParseFloatError> + Copy,
{
    let parsed: T = value.parse()?;
    if is_infinite(parsed) && !is_infinity_literal(value) {
        return Err(InvalidFloat::OutOfRange);
    }
    Ok(parsed)
}

/// Parse a 32-bit float; overflow is an error, explicit `inf` is not
pub fn parse_f32(value: &str) -> std::result::Result<f32, InvalidFloat> {
    parse_finite(value, f32::is_infinite)
}

/// Parse a 64-bit float; overflow is an error, explicit `inf` is not
pub fn parse_f64(value: &str) -> std::result::Result<f64, InvalidFloat> {
    parse_finite(value, f64::is_infinite)
}

/// Handle for reading validated values from an environment source
#[derive(Debug, Clone, Default)]
pub struct Env<S = SystemEnv> {
    source: S,
    prefix: String,
}

impl Env<SystemEnv> {
    /// Accessors over the process environment
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<S: EnvSource> Env<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            prefix: String::new(),
        }
    }

    /// Namespace every lookup under `prefix`
    ///
    /// With a prefix, `name` is upper-cased and appended to it (see
    /// [`build_env_key`]). The effective key is what diagnostics report.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The environment key looked up for `name`
    pub fn key(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            build_env_key(&self.prefix, name)
        }
    }

    fn fetch(&self, key: &str) -> Result<Option<String>> {
        match self.source.var(key) {
            Ok(value) => {
                debug!(var = %key, value = %redact(key, &value), "Read environment variable");
                Ok(Some(value))
            }
            Err(VarError::NotPresent) => {
                trace!(var = %key, "Environment variable not set");
                Ok(None)
            }
            Err(VarError::NotUnicode(_)) => Err(EnvError::NotUnicode {
                name: key.to_string(),
            }),
        }
    }

    fn fetch_required(&self, key: &str) -> Result<String> {
        self.fetch(key)?.ok_or_else(|| EnvError::missing(key))
    }

    fn coerce<T, E, P>(
        &self,
        name: &str,
        kind: &'static str,
        checks: &[Check<T>],
        parse: P,
    ) -> Result<T>
    where
        E: StdError + Send + Sync + 'static,
        P: FnOnce(&str) -> std::result::Result<T, E>,
    {
        let key = self.key(name);
        let raw = self.fetch_required(&key)?;
        let value = parse(&raw).map_err(|e| EnvError::malformed(&key, kind, e))?;
        run_checks(&value, checks).map_err(|e| EnvError::rejected(&key, e))?;
        Ok(value)
    }

    fn checked_url(&self, key: &str, raw: &str, checks: &[Check<str>]) -> Result<Url> {
        run_checks(raw, checks).map_err(|e| EnvError::rejected(key, e))?;
        Url::parse(raw).map_err(|e| EnvError::malformed(key, "URL", e))
    }

    /// Required string; checks see the raw value
    pub fn try_required(&self, name: &str, checks: &[Check<str>]) -> Result<String> {
        let key = self.key(name);
        let value = self.fetch_required(&key)?;
        run_checks(value.as_str(), checks).map_err(|e| EnvError::rejected(&key, e))?;
        Ok(value)
    }

    /// Required value of any `FromStr` type; checks see the parsed value
    pub fn try_required_parsed<T>(&self, name: &str, checks: &[Check<T>]) -> Result<T>
    where
        T: FromStr,
        T::Err: StdError + Send + Sync + 'static,
    {
        self.coerce(name, std::any::type_name::<T>(), checks, str::parse::<T>)
    }

    /// Required base-10 platform-width integer
    pub fn try_required_int(&self, name: &str, checks: &[Check<isize>]) -> Result<isize> {
        self.coerce(name, "integer", checks, str::parse::<isize>)
    }

    /// Required base-10 32-bit integer
    pub fn try_required_int32(&self, name: &str, checks: &[Check<i32>]) -> Result<i32> {
        self.coerce(name, "32-bit integer", checks, str::parse::<i32>)
    }

    /// Required base-10 64-bit integer
    pub fn try_required_int64(&self, name: &str, checks: &[Check<i64>]) -> Result<i64> {
        self.coerce(name, "64-bit integer", checks, str::parse::<i64>)
    }

    pub fn try_required_float32(&self, name: &str, checks: &[Check<f32>]) -> Result<f32> {
        self.coerce(name, "32-bit float", checks, parse_f32)
    }

    pub fn try_required_float64(&self, name: &str, checks: &[Check<f64>]) -> Result<f64> {
        self.coerce(name, "64-bit float", checks, parse_f64)
    }

    pub fn try_required_bool(&self, name: &str) -> Result<bool> {
        self.coerce(name, "boolean", &[], parse_bool)
    }

    /// Absent means `false`; present but malformed is still an error
    pub fn try_optional_bool(&self, name: &str) -> Result<bool> {
        let key = self.key(name);
        match self.fetch(&key)? {
            Some(raw) => parse_bool(&raw).map_err(|e| EnvError::malformed(&key, "boolean", e)),
            None => Ok(false),
        }
    }

    /// Required URL; checks see the raw string before parsing
    pub fn try_required_url(&self, name: &str, checks: &[Check<str>]) -> Result<Url> {
        let key = self.key(name);
        let raw = self.fetch_required(&key)?;
        self.checked_url(&key, &raw, checks)
    }

    /// Absent means `None`; when present, behaves like [`Env::try_required_url`]
    pub fn try_optional_url(&self, name: &str, checks: &[Check<str>]) -> Result<Option<Url>> {
        let key = self.key(name);
        match self.fetch(&key)? {
            Some(raw) => self.checked_url(&key, &raw, checks).map(Some),
            None => Ok(None),
        }
    }

    #[track_caller]
    pub fn required(&self, name: &str, checks: &[Check<str>]) -> String {
        fail_fast(self.try_required(name, checks))
    }

    #[track_caller]
    pub fn required_parsed<T>(&self, name: &str, checks: &[Check<T>]) -> T
    where
        T: FromStr,
        T::Err: StdError + Send + Sync + 'static,
    {
        fail_fast(self.try_required_parsed(name, checks))
    }

    #[track_caller]
    pub fn required_int(&self, name: &str, checks: &[Check<isize>]) -> isize {
        fail_fast(self.try_required_int(name, checks))
    }

    #[track_caller]
    pub fn required_int32(&self, name: &str, checks: &[Check<i32>]) -> i32 {
        fail_fast(self.try_required_int32(name, checks))
    }

    #[track_caller]
    pub fn required_int64(&self, name: &str, checks: &[Check<i64>]) -> i64 {
        fail_fast(self.try_required_int64(name, checks))
    }

    #[track_caller]
    pub fn required_float32(&self, name: &str, checks: &[Check<f32>]) -> f32 {
        fail_fast(self.try_required_float32(name, checks))
    }

    #[track_caller]
    pub fn required_float64(&self, name: &str, checks: &[Check<f64>]) -> f64 {
        fail_fast(self.try_required_float64(name, checks))
    }

    #[track_caller]
    pub fn required_bool(&self, name: &str) -> bool {
        fail_fast(self.try_required_bool(name))
    }

    #[track_caller]
    pub fn optional_bool(&self, name: &str) -> bool {
        fail_fast(self.try_optional_bool(name))
    }

    #[track_caller]
    pub fn required_url(&self, name: &str, checks: &[Check<str>]) -> Url {
        fail_fast(self.try_required_url(name, checks))
    }

    #[track_caller]
    pub fn optional_url(&self, name: &str, checks: &[Check<str>]) -> Option<Url> {
        fail_fast(self.try_optional_url(name, checks))
    }
}

/// Unwrap a startup read, terminating with the diagnostic on failure
#[track_caller]
pub fn fail_fast<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            error!(
                kind = ?err.kind(),
                var = err.name().unwrap_or_default(),
                "{}",
                format_error_chain(&err)
            );
            panic!("{}", report(&err));
        }
    }
}
