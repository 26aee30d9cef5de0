use crate::validation::Violations;
use thiserror::Error;

/// Result alias used by every codec operation.
pub type PayloadResult<T> = Result<T, PayloadError>;

#[derive(Debug, Error)]
pub enum PayloadError {
    /// One or more field rules failed; the message joins every violation with a space.
    #[error("{0}")]
    Validation(Violations),

    #[error("BINDING ERROR: invalid value '{value}' for field '{key}', expected {expected}")]
    Binding {
        key: String,
        value: String,
        expected: String,
    },

    #[error("MALFORMED INPUT: {code} - {message}")]
    Malformed { code: String, message: String },

    #[error("CONFIG ERROR: {message}")]
    Config { message: String },
}

impl PayloadError {
    pub(crate) fn malformed(code: &str, message: impl Into<String>) -> Self {
        PayloadError::Malformed {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Stable error code for hosts that map failures onto their own responses.
    pub fn code(&self) -> &str {
        match self {
            PayloadError::Validation(_) => error_codes::VALIDATION_FAILED,
            PayloadError::Binding { .. } => error_codes::BINDING_FAILED,
            PayloadError::Malformed { code, .. } => code.as_str(),
            PayloadError::Config { .. } => error_codes::INVALID_CONFIG,
        }
    }

    /// Individual violation messages, empty for non-validation failures.
    pub fn violations(&self) -> &[String] {
        match self {
            PayloadError::Validation(violations) => violations.messages(),
            _ => &[],
        }
    }
}

impl From<Violations> for PayloadError {
    fn from(violations: Violations) -> Self {
        PayloadError::Validation(violations)
    }
}

/// **PAYLOAD ERROR CODES**
///
/// **MANDATE**: Use these standardized error codes for consistent error reporting.
pub mod error_codes {
    pub const VALIDATION_FAILED: &str = "QR_PAYLOAD_VALIDATION_FAILED";
    pub const BINDING_FAILED: &str = "QR_PAYLOAD_BINDING_FAILED";
    pub const INVALID_SCHEME: &str = "QR_PAYLOAD_MALFORMED_INVALID_SCHEME";
    pub const INVALID_URI: &str = "QR_PAYLOAD_MALFORMED_INVALID_URI";
    pub const INVALID_FIELD: &str = "QR_PAYLOAD_MALFORMED_INVALID_FIELD";
    pub const INVALID_ENCODING: &str = "QR_PAYLOAD_MALFORMED_INVALID_ENCODING";
    pub const INPUT_TOO_LARGE: &str = "QR_PAYLOAD_MALFORMED_INPUT_TOO_LARGE";
    pub const UNKNOWN_KIND: &str = "QR_PAYLOAD_MALFORMED_UNKNOWN_KIND";
    pub const INVALID_CONFIG: &str = "QR_PAYLOAD_INVALID_CONFIG";
}
