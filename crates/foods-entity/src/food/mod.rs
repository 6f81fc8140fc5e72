//! Food catalog entities.

pub mod model;
pub mod region;

pub use model::Food;
pub use region::{REGION_FILTER, REGIONS};
