//! Error handling
//!
//! Every accessor failure is an [`EnvError`]. The variants follow the three
//! ways a startup value can be wrong:
//!
//! - the variable is missing
//! - the raw text does not coerce into the requested type
//! - a check rejected the coerced value
//!
//! plus [`EnvError::Invalid`] for whole-struct validation in
//! [`FromEnv`](crate::config::FromEnv).
//!
//! Parser and check reasons are kept as the error `source()`, so
//! [`report`] renders the full one-line diagnostic:
//!
//! ```rust
//! use env_guard::error::report;
//! use env_guard::{Env, MapEnv};
//!
//! let env = Env::new(MapEnv::new().with("PORT", "eighty"));
//! let err = env.try_required_int("PORT", &[]).unwrap_err();
//! assert_eq!(
//!     report(&err),
//!     "invalid value for environment variable: PORT: not a valid integer: invalid digit found in string"
//! );
//! ```

mod chain;

pub use chain::{format_error_chain, report};

use std::error::Error as StdError;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced while reading configuration from the environment
#[derive(Debug, Error)]
pub enum EnvError {
    /// Required variable is absent
    #[error("missing required environment variable: {name}")]
    Missing { name: String },

    /// Variable is present but its value is not valid Unicode
    #[error("invalid value for environment variable: {name}: not valid unicode")]
    NotUnicode { name: String },

    /// Variable is present but does not parse as `kind`
    #[error("invalid value for environment variable: {name}: not a valid {kind}")]
    Malformed {
        name: String,
        kind: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Value parsed, then a check rejected it
    #[error("invalid value for environment variable: {name}")]
    Rejected {
        name: String,
        #[source]
        source: ValidationError,
    },

    /// A configuration struct failed its own validation
    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// Failure bucket of an [`EnvError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Missing,
    Malformed,
    Rejected,
    Invalid,
}

impl EnvError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    pub fn malformed<E>(name: impl Into<String>, kind: &'static str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Malformed {
            name: name.into(),
            kind,
            source: Box::new(source),
        }
    }

    pub fn rejected(name: impl Into<String>, source: ValidationError) -> Self {
        Self::Rejected {
            name: name.into(),
            source,
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    /// Which of the failure buckets this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Missing { .. } => ErrorKind::Missing,
            Self::NotUnicode { .. } | Self::Malformed { .. } => ErrorKind::Malformed,
            Self::Rejected { .. } => ErrorKind::Rejected,
            Self::Invalid { .. } => ErrorKind::Invalid,
        }
    }

    /// The environment variable the error is about, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Missing { name }
            | Self::NotUnicode { name }
            | Self::Malformed { name, .. }
            | Self::Rejected { name, .. } => Some(name),
            Self::Invalid { .. } => None,
        }
    }
}

/// Result type for environment reads
pub type Result<T> = std::result::Result<T, EnvError>;
