//! User domain entities.

pub mod model;
pub mod role;

pub use model::{ROLE_FILTER, User};
pub use role::UserRole;
