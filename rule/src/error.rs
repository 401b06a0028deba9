//! Rule error types.

use thiserror::Error;

/// Result type for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors that can occur during rule registration and import.
///
/// Evaluation itself has no error path: conditions are validated when a
/// rule is admitted, so scanning the rule set over a batch is total.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid rule \"{name}\": {message}")]
    InvalidRule { name: String, message: String },

    #[error("Invalid match pattern \"{pattern}\": {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Unknown built-in rule: {name}")]
    UnknownBuiltin { name: String },

    #[error("Rule import failed: {message}")]
    ImportFailed { message: String },
}

impl RuleError {
    pub fn invalid_rule(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn unknown_builtin(name: impl Into<String>) -> Self {
        Self::UnknownBuiltin { name: name.into() }
    }

    pub fn import_failed(message: impl Into<String>) -> Self {
        Self::ImportFailed {
            message: message.into(),
        }
    }
}
