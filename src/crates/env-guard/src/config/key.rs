/// Build a prefixed environment variable name
///
/// # Arguments
///
/// * `prefix` - Prefix to add, used verbatim
/// * `name` - Variable name (will be uppercased)
///
/// # Example
///
/// ```rust
/// use env_guard::build_env_key;
///
/// assert_eq!(build_env_key("APP_", "port"), "APP_PORT");
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_env_key() {
        assert_eq!(build_env_key("APP_", "port"), "APP_PORT");
        assert_eq!(build_env_key("", "debug"), "DEBUG");
        assert_eq!(build_env_key("MY_", "some_value"), "MY_SOME_VALUE");
        assert_eq!(build_env_key("svc_", "HOST"), "svc_HOST");
    }
}
