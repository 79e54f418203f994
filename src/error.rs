use thiserror::Error;

/// Unified error type for project-version operations
#[derive(Error, Debug)]
pub enum ProjectVersionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Provider request failed: {0}")]
    Provider(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in project-version
pub type Result<T> = std::result::Result<T, ProjectVersionError>;

impl ProjectVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ProjectVersionError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ProjectVersionError::Version(msg.into())
    }

    /// Create a provider error with context
    pub fn provider(msg: impl Into<String>) -> Self {
        ProjectVersionError::Provider(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProjectVersionError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ProjectVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ProjectVersionError::version("test")
            .to_string()
            .contains("Version"));
        assert!(ProjectVersionError::provider("test")
            .to_string()
            .contains("Provider"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ProjectVersionError::config("x"), "Configuration error"),
            (ProjectVersionError::version("x"), "Version parsing error"),
            (ProjectVersionError::provider("x"), "Provider request failed"),
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
    fn test_error_special_characters_in_messages() {
        let special_chars = vec![
            "message with\nnewline",
            "message with\ttab",
            "message with 'quotes'",
            "message with unicode: ñ",
        ];

        for msg in special_chars {
            let err = ProjectVersionError::version(msg);
            let err_msg = err.to_string();
            assert!(err_msg.contains("Version"));
        }
    }
}
