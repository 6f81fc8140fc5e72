//! Generic resource controller.

pub mod resource;

pub use resource::{QueryParams, ResourceController, ResourceParams};
