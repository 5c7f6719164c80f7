//! Error types for connection resolution.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while resolving a connection descriptor.
///
/// Every error is fatal to the resolution call in progress; nothing is
/// retried internally and no partial specification is ever returned.
#[derive(Error, Debug, Diagnostic)]
pub enum ResolveError {
    /// The URL decoder was given a blank string.
    #[error("database connection URL cannot be empty")]
    #[diagnostic(code(connspec::empty_url))]
    EmptyUrl,

    /// The URL could not be parsed. The URI layer's error is surfaced
    /// untranslated.
    #[error(transparent)]
    #[diagnostic(code(connspec::invalid_url))]
    InvalidUrl(#[from] url::ParseError),

    /// No adapter could be determined from the input.
    #[error("{message}")]
    #[diagnostic(code(connspec::adapter_not_specified))]
    AdapterNotSpecified { message: String },

    /// The adapter is unknown to the adapter registry, or its driver module
    /// failed to load.
    #[error("{message}")]
    #[diagnostic(code(connspec::adapter_not_found))]
    AdapterNotFound { adapter: String, message: String },
}

impl ResolveError {
    /// A named configuration is missing from the registry.
    pub fn unknown_configuration(name: impl Into<String>, available: Vec<String>) -> Self {
        let name = name.into();
        Self::AdapterNotSpecified {
            message: format!(
                "'{}' database is not configured. Available: {:?}",
                name, available
            ),
        }
    }

    /// A named registry entry turned out to be a grouping container.
    pub fn group_configuration(name: impl Into<String>) -> Self {
        Self::AdapterNotSpecified {
            message: format!(
                "'{}' is a group of configurations and cannot be resolved directly",
                name.into()
            ),
        }
    }

    /// The resolved configuration has no `adapter` key.
    pub fn missing_adapter() -> Self {
        Self::AdapterNotSpecified {
            message: "database configuration does not specify adapter".to_string(),
        }
    }

    /// No descriptor was supplied and no current environment is set.
    pub fn no_current_environment() -> Self {
        Self::AdapterNotSpecified {
            message: "no connection descriptor was given and no current environment is set"
                .to_string(),
        }
    }

    /// The adapter's driver module does not exist at all.
    pub fn adapter_missing(adapter: impl Into<String>) -> Self {
        let adapter = adapter.into();
        Self::AdapterNotFound {
            message: format!(
                "could not load the '{}' database adapter: ensure the adapter name is \
                 spelled correctly and the matching driver is registered",
                adapter
            ),
            adapter,
        }
    }

    /// The adapter's driver module exists but a dependency of it failed to
    /// load.
    pub fn adapter_dependency(adapter: impl Into<String>, cause: impl Into<String>) -> Self {
        let adapter = adapter.into();
        Self::AdapterNotFound {
            message: format!(
                "error loading the '{}' database adapter: missing a dependency? {}",
                adapter,
                cause.into()
            ),
            adapter,
        }
    }

    /// The adapter loaded but exposes no connection factory.
    pub fn nonexistent_adapter(adapter: impl Into<String>) -> Self {
        let adapter = adapter.into();
        Self::AdapterNotFound {
            message: format!(
                "database configuration specifies nonexistent {} adapter",
                adapter
            ),
            adapter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_configuration_enumerates_names() {
        let err = ResolveError::unknown_configuration(
            "production",
            vec!["development".to_string(), "test".to_string()],
        );

        let display = err.to_string();
        assert!(display.contains("'production' database is not configured"));
        assert!(display.contains("development"));
        assert!(display.contains("test"));
    }

    #[test]
    fn test_missing_adapter_display() {
        let err = ResolveError::missing_adapter();
        assert!(err.to_string().contains("does not specify adapter"));
    }

    #[test]
    fn test_adapter_missing_display() {
        let err = ResolveError::adapter_missing("postgresql");
        let display = err.to_string();
        assert!(display.contains("could not load"));
        assert!(display.contains("postgresql"));
        assert!(display.contains("spelled correctly"));
    }

    #[test]
    fn test_adapter_dependency_display() {
        let err = ResolveError::adapter_dependency("mysql2", "libmariadb not found");
        let display = err.to_string();
        assert!(display.contains("missing a dependency?"));
        assert!(display.contains("libmariadb not found"));
    }

    #[test]
    fn test_nonexistent_adapter_display() {
        let err = ResolveError::nonexistent_adapter("fancydb");
        assert!(err.to_string().contains("nonexistent fancydb adapter"));
    }

    #[test]
    fn test_parse_error_passes_through() {
        let parse_err = url::Url::parse("not-a-url").unwrap_err();
        let expected = parse_err.to_string();
        let err = ResolveError::from(parse_err);
        assert_eq!(err.to_string(), expected);
    }
}
