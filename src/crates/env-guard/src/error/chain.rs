//! Error chain rendering

use std::error::Error as StdError;
use std::fmt::Write;

/// Render an error and its `source()` chain on one line, joined with `": "`
///
/// This is the diagnostic written when a fail-fast accessor terminates.
pub fn report(error: &dyn StdError) -> String {
    let mut result = error.to_string();
    let mut current = error.source();

    while let Some(source) = current {
        let _ = write!(result, ": {}", source);
        current = source.source();
    }

    result
}

/// Format an error chain as a multi-line string
///
/// Walks the error chain via `source()` and formats each error
/// on a separate line with indentation.
///
/// # Example
///
/// ```rust,ignore
/// use env_guard::error::format_error_chain;
///
/// if let Err(e) = env.try_required_int("PORT", &[]) {
///     eprintln!("{}", format_error_chain(&e));
/// }
/// ```
pub fn format_error_chain(error: &dyn StdError) -> String {
    let mut result = format!("Error: {}", error);
    let mut current = error.source();
    let mut level = 1;

    while let Some(source) = current {
        let _ = write!(
            result,
            "\n{:indent$}Caused by: {}",
            "",
            source,
            indent = level * 2
        );
        current = source.source();
        level += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use crate::EnvError;

    fn nested_error() -> EnvError {
        EnvError::malformed(
            "RATIO",
            "64-bit float",
            "abc".parse::<f64>().unwrap_err(),
        )
    }

    #[test]
    fn test_report_single() {
        let err = EnvError::missing("MISSING");
        assert_eq!(report(&err), "missing required environment variable: MISSING");
    }

    #[test]
    fn test_report_chain() {
        let err = nested_error();
        assert_eq!(
            report(&err),
            "invalid value for environment variable: RATIO: not a valid 64-bit float: invalid float literal"
        );
    }

    #[test]
    fn test_format_error_chain() {
        let formatted = format_error_chain(&nested_error());

        assert!(formatted.starts_with("Error: invalid value for environment variable: RATIO"));
        assert!(formatted.contains("\n  Caused by: invalid float literal"));
    }

    #[test]
    fn test_format_single_error() {
        let err = ValidationError::new("value must be positive");
        assert_eq!(format_error_chain(&err), "Error: value must be positive");
    }
}
