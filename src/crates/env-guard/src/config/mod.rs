//! Configuration assembly
//!
//! Helpers for reading whole configuration structs out of the environment:
//!
//! - `build_env_key` for prefixed variable names
//! - `FromEnv` for structs that read, then validate, themselves
//!
//! # Example
//!
//! ```rust
//! use env_guard::validation::{not_empty, positive};
//! use env_guard::{Env, EnvError, EnvSource, FromEnv, MapEnv, Url};
//!
//! struct ServerConfig {
//!     endpoint: Url,
//!     min_workers: i32,
//!     max_workers: i32,
//!     debug: bool,
//! }
//!
//! impl FromEnv for ServerConfig {
//!     fn from_env<S: EnvSource>(env: &Env<S>) -> env_guard::Result<Self> {
//!         Ok(Self {
//!             endpoint: env.try_required_url("endpoint", &[not_empty])?,
//!             min_workers: env.try_required_int32("min_workers", &[positive])?,
//!             max_workers: env.try_required_int32("max_workers", &[positive])?,
//!             debug: env.try_optional_bool("debug")?,
//!         })
//!     }
//!
//!     fn validate(&self) -> env_guard::Result<()> {
//!         if self.min_workers > self.max_workers {
//!             return Err(EnvError::invalid("min_workers exceeds max_workers"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let env = Env::new(
//!     MapEnv::new()
//!         .with("SRV_ENDPOINT", "https://example.com")
//!         .with("SRV_MIN_WORKERS", "2")
//!         .with("SRV_MAX_WORKERS", "8"),
//! )
//! .with_prefix("SRV_");
//!
//! let config = ServerConfig::try_load_from(&env).unwrap();
//! assert_eq!(config.max_workers, 8);
//! assert!(!config.debug);
//! ```

mod from_env;
mod key;

pub use from_env::FromEnv;
pub use key::build_env_key;
