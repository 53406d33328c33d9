//! Typed, validated environment variable accessors
//!
//! This crate centralizes the "read env var, parse it, validate it, fail fast
//! if invalid" boilerplate that service bootstrapping code repeats.
//!
//! # Modules
//!
//! - `accessors` - Required/optional lookups with type coercion
//! - `validation` - Composable value checks (`not_empty`, `non_negative`, `positive`)
//! - `source` - Where values come from (`SystemEnv`, `MapEnv`)
//! - `config` - Prefixed keys and the `FromEnv` trait for whole config structs
//! - `error` - Error taxonomy and error chain formatting
//! - `logging` - Redaction of sensitive values in log output
//!
//! # Example
//!
//! ```rust,no_run
//! use env_guard::validation::{non_negative, not_empty, positive};
//!
//! let database_url = env_guard::required_url("DATABASE_URL", &[not_empty]);
//! let port = env_guard::required_int32("PORT", &[positive]);
//! let workers = env_guard::required_int("WORKERS", &[non_negative]);
//! let debug = env_guard::optional_bool("DEBUG");
//! ```
//!
//! Every function at the crate root terminates startup on a missing or
//! malformed value. Use [`Env`] and its `try_*` methods to handle failures
//! yourself.

pub mod accessors;
pub mod config;
pub mod error;
pub mod logging;
pub mod source;
pub mod validation;

pub use accessors::Env;
pub use config::{build_env_key, FromEnv};
pub use error::{EnvError, ErrorKind, Result};
pub use source::{EnvSource, MapEnv, SystemEnv};
pub use url::Url;
pub use validation::{Check, ValidationError};

/// Read a required string variable, or terminate.
pub fn required(name: &str, checks: &[Check<str>]) -> String {
    Env::system().required(name, checks)
}

/// Read a required platform-width integer, or terminate.
pub fn required_int(name: &str, checks: &[Check<isize>]) -> isize {
    Env::system().required_int(name, checks)
}

/// Read a required 32-bit integer, or terminate.
pub fn required_int32(name: &str, checks: &[Check<i32>]) -> i32 {
    Env::system().required_int32(name, checks)
}

/// Read a required 64-bit integer, or terminate.
pub fn required_int64(name: &str, checks: &[Check<i64>]) -> i64 {
    Env::system().required_int64(name, checks)
}

/// Read a required 32-bit float, or terminate.
pub fn required_float32(name: &str, checks: &[Check<f32>]) -> f32 {
    Env::system().required_float32(name, checks)
}

/// Read a required 64-bit float, or terminate.
pub fn required_float64(name: &str, checks: &[Check<f64>]) -> f64 {
    Env::system().required_float64(name, checks)
}

/// Read a required boolean, or terminate.
pub fn required_bool(name: &str) -> bool {
    Env::system().required_bool(name)
}

/// Read an optional boolean. Absent means `false`; present but malformed terminates.
pub fn optional_bool(name: &str) -> bool {
    Env::system().optional_bool(name)
}

/// Read a required URL, or terminate. Checks run on the raw string.
pub fn required_url(name: &str, checks: &[Check<str>]) -> Url {
    Env::system().required_url(name, checks)
}

/// Read an optional URL. Absent means `None`; present but invalid terminates.
pub fn optional_url(name: &str, checks: &[Check<str>]) -> Option<Url> {
    Env::system().optional_url(name, checks)
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
