//! Shared error type across navstat crates.

use thiserror::Error;

/// Stable error codes, used as log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed or unparseable report body.
    BadRequest,
    /// Page identifier rejected by a recorder.
    InvalidPageUri,
    /// Report decoded but failed field rules.
    ValidationFailed,
    /// A backend could not accept a metric.
    RecordFailed,
    /// Startup/configuration problem.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::InvalidPageUri => "INVALID_PAGE_URI",
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::RecordFailed => "RECORD_FAILED",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NavstatError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum NavstatError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("invalid page-uri: {0}")]
    InvalidPageUri(String),
    #[error("validation failed: {field}: {reason}")]
    ValidationFailed { field: &'static str, reason: String },
    #[error("record failed ({recorder}): {reason}")]
    RecordFailed { recorder: String, reason: String },
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NavstatError {
    /// Map an error to its stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            NavstatError::BadRequest(_) => ClientCode::BadRequest,
            NavstatError::InvalidPageUri(_) => ClientCode::InvalidPageUri,
            NavstatError::ValidationFailed { .. } => ClientCode::ValidationFailed,
            NavstatError::RecordFailed { .. } => ClientCode::RecordFailed,
            NavstatError::Config(_) => ClientCode::Config,
            NavstatError::Internal(_) => ClientCode::Internal,
        }
    }
}
