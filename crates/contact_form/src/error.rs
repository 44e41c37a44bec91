use serde::Serialize;
use strum::Display;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a single field is currently invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ErrorKind {
    /// Required field left empty.
    Required,
    /// Non-empty value rejected by the field's format rule.
    InvalidFormat,
}

/// Validation failure attached to a field.
///
/// Displays as the user-facing message, e.g. `Error: Email is required.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn required(label: &str) -> Self {
        Self {
            kind: ErrorKind::Required,
            message: format!("Error: {label} is required."),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidFormat,
            message: message.into(),
        }
    }
}

/// Errors raised by the form API itself (never by user input).
#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("duplicate field key: {0}")]
    DuplicateField(String),

    #[error("field {0} has an empty label")]
    EmptyLabel(String),

    #[error("submission failed: {0}")]
    Submission(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_message_uses_label() {
        let err = FieldError::required("Phone number");
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.to_string(), "Error: Phone number is required.");
    }

    #[test]
    fn submission_error_keeps_source() {
        let err = FormError::Submission("backend unavailable".into());
        assert_eq!(err.to_string(), "submission failed: backend unavailable");
        assert!(std::error::Error::source(&err).is_some());
    }
}
