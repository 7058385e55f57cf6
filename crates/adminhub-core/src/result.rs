//! Convenience result type alias for AdminHub.

use crate::error::AppError;

/// A specialized `Result` type for AdminHub operations.
pub type AppResult<T> = Result<T, AppError>;
