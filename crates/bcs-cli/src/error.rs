//! Error types for the CLI application.

use bcs_sdk::SdkError;
use bcs_store::IndexError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for success.
pub const EXIT_OK: i32 = 0;
/// Exit code for "not found" and failed validation.
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit code for a missing corpus or a broken configuration.
pub const EXIT_ENVIRONMENT: i32 = 2;
/// Exit code for malformed input (EINVAL).
pub const EXIT_INVALID: i32 = 22;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SDK error
    #[error("{0}")]
    Sdk(#[from] SdkError),

    /// Index error
    #[error("{0}")]
    Index(#[from] IndexError),

    /// Gatekeeper error
    #[error("{0}")]
    Gatekeeper(#[from] bcs_gatekeeper::GatekeeperError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing matched
    #[error("{0}")]
    NotFound(String),

    /// Validation found violations
    #[error("Validation failed with {0} violation(s)")]
    ValidationFailed(usize),

    /// Failures already printed; carries the exit code only
    #[error("exit status {0}")]
    Reported(i32),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Sdk(SdkError::MalformedCode(_)) | CliError::InvalidInput(_) => EXIT_INVALID,
            CliError::Sdk(SdkError::Index(_))
            | CliError::Index(_)
            | CliError::Gatekeeper(_)
            | CliError::Config(_)
            | CliError::Toml(_) => EXIT_ENVIRONMENT,
            CliError::Reported(code) => *code,
            _ => EXIT_NOT_FOUND,
        }
    }

    /// Whether the message was already shown to the user.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Reported(_))
    }
}

/// Exit code for a batch of failures: malformed input outranks "not found".
pub fn worst_exit_code<'a>(errors: impl IntoIterator<Item = &'a CliError>) -> i32 {
    errors
        .into_iter()
        .map(CliError::exit_code)
        .max_by_key(|code| match *code {
            EXIT_INVALID => 3,
            EXIT_ENVIRONMENT => 2,
            EXIT_NOT_FOUND => 1,
            _ => 0,
        })
        .unwrap_or(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcs_domain::{CodeAddress, ParseError};
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        let malformed = CliError::Sdk(SdkError::MalformedCode(ParseError::MalformedCode("x".into())));
        let missing = CliError::Sdk(SdkError::CodeNotFound(CodeAddress::rule(99, 99)));
        let no_root = CliError::Index(IndexError::RootNotFound(PathBuf::from("/nope")));

        assert_eq!(malformed.exit_code(), EXIT_INVALID);
        assert_eq!(missing.exit_code(), EXIT_NOT_FOUND);
        assert_eq!(no_root.exit_code(), EXIT_ENVIRONMENT);
        assert_eq!(CliError::ValidationFailed(3).exit_code(), EXIT_NOT_FOUND);
        assert_eq!(CliError::Reported(22).exit_code(), 22);
    }

    #[test]
    fn test_worst_exit_code() {
        let errors = vec![
            CliError::NotFound("a".into()),
            CliError::InvalidInput("b".into()),
        ];
        assert_eq!(worst_exit_code(&errors), EXIT_INVALID);
        assert_eq!(worst_exit_code(&errors[..1]), EXIT_NOT_FOUND);
        assert_eq!(worst_exit_code(std::iter::empty()), EXIT_OK);
    }
}
