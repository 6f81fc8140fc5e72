//! Convenience result type alias for Latino Foods.

use crate::error::AppError;

/// A specialized `Result` type for Latino Foods operations.
pub type AppResult<T> = Result<T, AppError>;
