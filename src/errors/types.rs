//! # Error Types
//!
//! Error types for secret retrieval using `thiserror`.

use std::fmt;

/// Custom result type for secret-access operations
pub type Result<T> = std::result::Result<T, SecretAccessError>;

/// Main error type for secret-access
#[derive(thiserror::Error, Debug)]
pub enum SecretAccessError {
    /// The secrets store could not fulfil the request
    #[error("Remote access failure for secret '{secret_id}' in {region} ({kind}): {message}")]
    RemoteAccess {
        secret_id: String,
        region: String,
        kind: RemoteFailureKind,
        message: String,
    },

    /// The store answered but the payload is not a usable secret
    #[error("Invalid payload for secret '{secret_id}': {reason}")]
    InvalidPayload { secret_id: String, reason: String },

    /// The request was rejected before reaching the store
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },

    /// Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Reason reported for a remote access failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteFailureKind {
    NotFound,
    AccessDenied,
    Throttled,
    InvalidRequest,
    ServiceUnavailable,
    Network,
    Other,
}

impl RemoteFailureKind {
    /// Classify a service error code (e.g. `ResourceNotFoundException`).
    pub fn from_error_code(code: Option<&str>) -> Self {
        match code {
            Some("ResourceNotFoundException") => Self::NotFound,
            Some(
                "AccessDeniedException"
                | "UnrecognizedClientException"
                | "InvalidSignatureException"
                | "ExpiredTokenException"
                | "DecryptionFailure",
            ) => Self::AccessDenied,
            Some("ThrottlingException" | "TooManyRequestsException" | "LimitExceededException") => {
                Self::Throttled
            }
            Some("InvalidParameterException" | "InvalidRequestException") => Self::InvalidRequest,
            Some("InternalServiceError" | "InternalFailure" | "ServiceUnavailable") => {
                Self::ServiceUnavailable
            }
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::AccessDenied => "access_denied",
            Self::Throttled => "throttled",
            Self::InvalidRequest => "invalid_request",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Network => "network",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for RemoteFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SecretAccessError {
    /// Create a remote access failure
    pub fn remote_access<I, R, M>(secret_id: I, region: R, kind: RemoteFailureKind, message: M) -> Self
    where
        I: Into<String>,
        R: Into<String>,
        M: Into<String>,
    {
        Self::RemoteAccess {
            secret_id: secret_id.into(),
            region: region.into(),
            kind,
            message: message.into(),
        }
    }

    /// Create an invalid payload error
    pub fn invalid_payload<I: Into<String>, S: Into<String>>(secret_id: I, reason: S) -> Self {
        Self::InvalidPayload {
            secret_id: secret_id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request<S: Into<String>>(reason: S) -> Self {
        Self::InvalidRequest { reason: reason.into() }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error with field information
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Failure kind if this is a remote access failure
    pub fn remote_kind(&self) -> Option<RemoteFailureKind> {
        match self {
            Self::RemoteAccess { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for SecretAccessError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string())
                    })
                    .collect();
                format!("{}: {}", field, error_messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(format!("Validation failed: {}", message))
    }
}
