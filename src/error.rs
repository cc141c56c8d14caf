use thiserror::Error;

/// Unified error type for relcut operations
#[derive(Error, Debug)]
pub enum RelcutError {
    #[error("Invalid version: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Package notes error: {0}")]
    Notes(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in relcut
pub type Result<T> = std::result::Result<T, RelcutError>;

impl RelcutError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        RelcutError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelcutError::Config(msg.into())
    }

    /// Create a package notes error with context
    pub fn notes(msg: impl Into<String>) -> Self {
        RelcutError::Notes(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RelcutError::config("missing notes path");
        assert_eq!(err.to_string(), "Configuration error: missing notes path");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RelcutError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(RelcutError::version("bad").to_string().contains("version"));
        assert!(RelcutError::notes("bad").to_string().contains("notes"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (RelcutError::version("x"), "Invalid version"),
            (RelcutError::config("x"), "Configuration error"),
            (RelcutError::notes("x"), "Package notes error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            RelcutError::version(""),
            RelcutError::config(""),
            RelcutError::notes(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
