//! # foods-core
//!
//! Core crate for Latino Foods. Contains the storage-agnostic repository
//! contract, configuration schemas, pagination and filter policies, the
//! response envelope, and the unified error system.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
