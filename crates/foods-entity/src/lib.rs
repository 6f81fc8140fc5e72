//! # foods-entity
//!
//! Domain entity models for Latino Foods. Every record derives `Debug`,
//! `Clone`, `Serialize`, `Deserialize` and implements
//! [`foods_core::traits::Record`] so it can flow through the generic
//! repository and controller.

pub mod food;
pub mod user;
