//! Regions a food can be listed under.

use foods_core::types::FilterPolicy;

/// Recognized region values.
pub const REGIONS: &[&str] = &["chile", "argentina", "brazil", "mexico", "peru"];

/// `GET /foods?region=` filter.
pub const REGION_FILTER: FilterPolicy = FilterPolicy {
    key: "region",
    allowed: REGIONS,
    wildcard: "all",
};
