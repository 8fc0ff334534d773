// Error handling types for the API client

use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::validation::ValidationResult;
use crate::storage::StoreError;

pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";
pub const TIMEOUT_MESSAGE: &str = "The server took too long to respond.";
pub const INVALID_INPUT_MESSAGE: &str = "The given data was invalid.";

/// Machine-readable codes the backend may use for an unverified account
const VERIFICATION_CODES: &[&str] = &[
    "email_not_verified",
    "email_unverified",
    "verification_required",
    "unverified_email",
];

/// Message fragments the backend has used for an unverified account.
///
/// Only consulted when no code field is present. English and Spanish
/// wordings are both in use on the server.
const VERIFICATION_MARKERS: &[&str] = &[
    "not verified",
    "verify your email",
    "email verification",
    "unverified",
    "no verificado",
    "no ha sido verificado",
    "verifica tu correo",
    "verificar tu correo",
    "verificación de correo",
];

/// Client error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. `body` is the server's
    /// JSON body verbatim, or a `{ "message" }` fallback when it sent none.
    #[error("{}", message_of(.body))]
    Response { status: u16, body: Value },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Validation failed: {}", .0.summary())]
    InvalidInput(ValidationResult),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not read {path}: {message}")]
    File { path: String, message: String },
}

impl ApiError {
    /// Builds the error for a non-success response from its raw body.
    pub fn from_response(status: u16, bytes: &[u8]) -> Self {
        let body = match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Null) | Err(_) => json!({ "message": fallback_message(status) }),
            Ok(value) => value,
        };
        ApiError::Response { status, body }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The JSON payload surfaced to callers.
    pub fn payload(&self) -> Value {
        match self {
            ApiError::Response { body, .. } => body.clone(),
            ApiError::Network(_) => json!({ "message": NETWORK_MESSAGE }),
            ApiError::Timeout => json!({ "message": TIMEOUT_MESSAGE }),
            ApiError::InvalidInput(result) => json!({
                "message": INVALID_INPUT_MESSAGE,
                "errors": result.to_field_map(),
            }),
            other => json!({ "message": other.to_string() }),
        }
    }

    pub fn message(&self) -> String {
        message_of(&self.payload())
    }

    pub fn kind(&self) -> ErrorKind {
        classify(self)
    }

    pub fn is_verification_required(&self) -> bool {
        matches!(self.kind(), ErrorKind::VerificationRequired { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        ApiError::InvalidInput(result)
    }
}

fn fallback_message(status: u16) -> String {
    match status {
        401 => "Unauthenticated.".to_string(),
        403 => "This action is unauthorized.".to_string(),
        404 => "Resource not found.".to_string(),
        500..=599 => format!("Server error ({})", status),
        _ => format!("Request failed with status {}", status),
    }
}

fn message_of(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .or_else(|| body.get("error").and_then(Value::as_str))
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}

/// Error categories surfaced to screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Field-keyed messages to show inline
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    /// Token missing, expired or rejected
    Auth { message: String },
    VerificationRequired { message: String },
    /// No response from the server
    Network { message: String },
    Unknown { message: String },
}

impl ErrorKind {
    pub fn message(&self) -> &str {
        match self {
            ErrorKind::Validation { message, .. }
            | ErrorKind::Auth { message }
            | ErrorKind::VerificationRequired { message }
            | ErrorKind::Network { message }
            | ErrorKind::Unknown { message } => message,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::Validation { .. } => "VALIDATION_ERROR",
            ErrorKind::Auth { .. } => "AUTH_ERROR",
            ErrorKind::VerificationRequired { .. } => "VERIFICATION_REQUIRED",
            ErrorKind::Network { .. } => "NETWORK_ERROR",
            ErrorKind::Unknown { .. } => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.message())
    }
}

/// Maps any client error to its category.
pub fn classify(error: &ApiError) -> ErrorKind {
    let message = error.message();
    match error {
        ApiError::InvalidInput(result) => ErrorKind::Validation {
            message,
            fields: result.to_field_map(),
        },
        ApiError::Network(_) | ApiError::Timeout => ErrorKind::Network { message },
        ApiError::Response { status, body } => {
            if requires_verification(*status, body) {
                ErrorKind::VerificationRequired { message }
            } else if let Some(fields) = field_errors(body) {
                ErrorKind::Validation { message, fields }
            } else if *status == 422 {
                ErrorKind::Validation {
                    message,
                    fields: BTreeMap::new(),
                }
            } else if *status == 401 || *status == 419 {
                ErrorKind::Auth { message }
            } else {
                ErrorKind::Unknown { message }
            }
        }
        _ => ErrorKind::Unknown { message },
    }
}

/// Whether a response body says the account email must be verified first.
pub fn requires_verification(status: u16, body: &Value) -> bool {
    let coded = ["code", "error_code", "error"].iter().any(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .map(|code| VERIFICATION_CODES.contains(&code.to_lowercase().as_str()))
            .unwrap_or(false)
    });
    if coded {
        return true;
    }

    if body.get("email_verified").and_then(Value::as_bool) == Some(false)
        || body.get("needs_verification").and_then(Value::as_bool) == Some(true)
    {
        return true;
    }

    if status != 403 && status != 409 {
        return false;
    }

    let message = message_of(body).to_lowercase();
    VERIFICATION_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

fn field_errors(body: &Value) -> Option<BTreeMap<String, Vec<String>>> {
    let errors = body.get("errors")?.as_object()?;
    let fields = errors
        .iter()
        .map(|(field, value)| {
            let messages = match value {
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                Value::String(single) => vec![single.clone()],
                other => vec![other.to_string()],
            };
            (field.clone(), messages)
        })
        .collect();
    Some(fields)
}
