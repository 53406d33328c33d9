//! Logging helpers
//!
//! Values read from the environment often hold credentials. Accessors log
//! every successful read at `debug` level, passing the value through
//! [`redact`] first so secrets never reach log output.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Placeholder logged instead of a sensitive value
pub const REDACTED: &str = "[REDACTED]";

fn sensitive_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(key|token|secret|passw(or)?d|pwd|auth|credential)")
            .expect("sensitive name pattern is valid")
    })
}

/// Whether a variable name looks like it holds a secret
///
/// # Example
///
/// ```rust
/// use env_guard::logging::is_sensitive;
///
/// assert!(is_sensitive("STRIPE_API_KEY"));
/// assert!(is_sensitive("db_password"));
/// assert!(!is_sensitive("PORT"));
/// ```
pub fn is_sensitive(name: &str) -> bool {
    sensitive_name_pattern().is_match(name)
}

/// The form of `value` that is safe to log for variable `name`
///
/// # Example
///
/// ```rust
/// use env_guard::logging::redact;
///
/// assert_eq!(redact("GITHUB_TOKEN", "ghp_abc123"), "[REDACTED]");
/// assert_eq!(redact("LOG_LEVEL", "debug"), "debug");
/// ```
pub fn redact<'a>(name: &str, value: &'a str) -> Cow<'a, str> {
    if is_sensitive(name) {
        Cow::Borrowed(REDACTED)
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_names() {
        for name in [
            "API_KEY",
            "OPENAI_APIKEY",
            "SESSION_TOKEN",
            "CLIENT_SECRET",
            "DB_PASSWORD",
            "SMTP_PASSWD",
            "ADMIN_PWD",
            "AUTH_HEADER",
            "gcp_credentials",
        ] {
            assert!(is_sensitive(name), "expected {} to be sensitive", name);
        }
    }

    #[test]
    fn test_plain_names() {
        for name in ["PORT", "HOST", "LOG_LEVEL", "DATABASE_URL", "WORKERS"] {
            assert!(!is_sensitive(name), "expected {} to be plain", name);
        }
    }

    #[test]
    fn test_redact_secret_value() {
        let logged = redact("Authorization", "Bearer abc123xyz");
        assert_eq!(logged, REDACTED);
        assert!(!logged.contains("abc123xyz"));
    }

    #[test]
    fn test_redact_preserves_safe_value() {
        assert_eq!(redact("HOST", "example.com"), "example.com");
    }
}
