//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("API key is required")]
    MissingCredential,

    #[error("No candidate models configured")]
    NoModels,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

impl DomainError {
    /// Check if this error was caused by user input rather than configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidQuestion(_) | DomainError::MissingCredential
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_display() {
        let error = DomainError::MissingCredential;
        assert_eq!(error.to_string(), "API key is required");
    }

    #[test]
    fn test_is_input_error_check() {
        assert!(DomainError::MissingCredential.is_input_error());
        assert!(DomainError::InvalidQuestion("empty".to_string()).is_input_error());
        assert!(!DomainError::NoModels.is_input_error());
        assert!(!DomainError::InvalidModel("".to_string()).is_input_error());
    }
}
