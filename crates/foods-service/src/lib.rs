//! # foods-service
//!
//! Request-handling logic for Latino Foods. The [`ResourceController`]
//! implements validate → delegate → shape for any [`Record`] type over a
//! [`Repository`]; [`AuthService`] handles registration and login.
//!
//! [`ResourceController`]: controller::ResourceController
//! [`AuthService`]: auth::AuthService
//! [`Record`]: foods_core::traits::Record
//! [`Repository`]: foods_core::traits::Repository

pub mod auth;
pub mod context;
pub mod controller;

pub use auth::AuthService;
pub use context::RequestContext;
pub use controller::{ResourceController, ResourceParams};
