//! The uniform `{status, data | error}` envelope returned by every endpoint.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Machine-readable error payload inside an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code, e.g. `"VALIDATION_ERROR"`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// JSON wrapper for endpoint results.
///
/// Exactly one of `data` and `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// HTTP-style result code.
    pub status: u16,
    /// Operation result on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl<T> Envelope<T> {
    /// Successful result with status 200.
    pub fn ok(data: T) -> Self {
        Self::with_status(200, data)
    }

    /// Successful creation with status 201.
    pub fn created(data: T) -> Self {
        Self::with_status(201, data)
    }

    /// Successful result with an explicit status.
    pub fn with_status(status: u16, data: T) -> Self {
        Self {
            status,
            data: Some(data),
            error: None,
        }
    }

    /// Failure envelope built from an application error.
    pub fn from_error(err: &AppError) -> Self {
        Self {
            status: err.status_code(),
            data: None,
            error: Some(ErrorBody {
                code: err.kind.to_string(),
                message: err.message.clone(),
            }),
        }
    }

    /// Whether the envelope carries data.
    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.status)
    }
}

impl<T> From<Result<T, AppError>> for Envelope<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::from_error(&err),
        }
    }
}
