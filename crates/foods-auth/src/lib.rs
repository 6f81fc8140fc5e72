//! # foods-auth
//!
//! Credential handling for Latino Foods.
//!
//! ## Modules
//!
//! - `jwt`: token payload, issuance and verification
//! - `password`: Argon2id password hashing

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
