//! `${VAR}` expansion in configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key in error messages. Bare `$VAR` is left as is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let lookup = |var: &str| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    };

    shellexpand::env_with_context(value, lookup)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

/// Variable referenced without a default and missing from the environment.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal_unchanged() {
        assert_eq!(
            expand_env("/docs", "paths.base_url").unwrap(),
            "/docs"
        );
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("REFDOCS_TEST_LIBRARY", "sound");
        }
        let result = expand_env("${REFDOCS_TEST_LIBRARY}", "content.namespace").unwrap();
        assert_eq!(result, "sound");
        unsafe {
            std::env::remove_var("REFDOCS_TEST_LIBRARY");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("REFDOCS_TEST_UNSET_BASE");
        }
        let result = expand_env("${REFDOCS_TEST_UNSET_BASE:-/en}", "paths.base_url").unwrap();
        assert_eq!(result, "/en");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("REFDOCS_TEST_HOST", "processing.org");
        }
        let result = expand_env("https://${REFDOCS_TEST_HOST}/en", "paths.base_url").unwrap();
        assert_eq!(result, "https://processing.org/en");
        unsafe {
            std::env::remove_var("REFDOCS_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("REFDOCS_TEST_MISSING");
        }
        let err = expand_env("${REFDOCS_TEST_MISSING}", "paths.base_url").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("REFDOCS_TEST_MISSING"));
        assert!(err.to_string().contains("paths.base_url"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand_env("$HOME", "paths.base_url").unwrap(), "$HOME");
    }
}
