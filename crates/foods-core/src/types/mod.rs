//! Request-handling types shared across the workspace.

pub mod filter;
pub mod pagination;
pub mod response;

pub use filter::{FilterPolicy, FilterSelection, SearchPredicate};
pub use pagination::{MAX_PAGE, PAGE_SIZE, PageSelection};
pub use response::{Envelope, Reply, STATUS_ACCEPTED, STATUS_CREATED};
