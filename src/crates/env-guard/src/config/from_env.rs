//! Trait for configuration structs read from the environment

use crate::accessors::{fail_fast, Env};
use crate::source::EnvSource;
use crate::Result;

/// A configuration struct that knows how to read itself from an [`Env`]
///
/// Implementors read each field with the `try_*` accessors and `?`, and may
/// override [`FromEnv::validate`] for rules spanning several fields. There is
/// no default or merge step: a field that is required must be set.
pub trait FromEnv: Sized {
    /// Read every field
    fn from_env<S: EnvSource>(env: &Env<S>) -> Result<Self>;

    /// Cross-field validation, run after a successful read
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Read, then validate
    fn try_load_from<S: EnvSource>(env: &Env<S>) -> Result<Self> {
        let config = Self::from_env(env)?;
        config.validate()?;
        tracing::debug!(
            config = std::any::type_name::<Self>(),
            prefix = env.prefix(),
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Read and validate from the process environment, terminating on failure
    #[track_caller]
    fn load() -> Self {
        fail_fast(Self::try_load_from(&Env::system()))
    }

    /// [`FromEnv::load`] with every variable namespaced under `prefix`
    #[track_caller]
    fn load_with_prefix(prefix: &str) -> Self {
        fail_fast(Self::try_load_from(&Env::system().with_prefix(prefix)))
    }
}
