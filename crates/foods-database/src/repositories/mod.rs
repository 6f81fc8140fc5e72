//! Repository implementations for all Latino Foods records.

pub mod food;
pub mod memory;
pub mod user;

pub use food::FoodRepository;
pub use memory::MemoryRepository;
pub use user::UserRepository;

use uuid::Uuid;

use foods_core::error::AppError;

/// Parse a path identifier. Anything that is not a UUID cannot exist.
pub(crate) fn parse_id(id: &str, resource: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id)
        .map_err(|_| AppError::not_found("Not found", format!("No {resource} with id '{id}'")))
}

/// Error for a well-formed identifier with no matching row.
pub(crate) fn missing(id: &str, resource: &str) -> AppError {
    AppError::not_found("Not found", format!("No {resource} with id '{id}'"))
}
