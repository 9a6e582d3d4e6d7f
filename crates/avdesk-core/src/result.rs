//! Convenience result type alias for AVDesk.

use crate::error::AppError;

/// A specialized `Result` type for AVDesk operations.
pub type AppResult<T> = Result<T, AppError>;
