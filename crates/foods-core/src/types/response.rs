//! Success response shapes.

use serde::{Deserialize, Serialize};

/// Status for every successful resource operation, reads included.
pub const STATUS_CREATED: u16 = 201;
/// Status for accepted registrations.
pub const STATUS_ACCEPTED: u16 = 202;

/// Uniform `{ "results": [...] }` body. Always a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The records, in order.
    pub results: Vec<T>,
}

impl<T> Envelope<T> {
    /// Wrap a sequence of records.
    pub fn many(results: Vec<T>) -> Self {
        Self { results }
    }

    /// Wrap a single record in a one-element sequence.
    pub fn one(record: T) -> Self {
        Self {
            results: vec![record],
        }
    }

    /// An empty sequence.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

/// A completed operation: one status and one body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: Envelope<T>,
}

impl<T> Reply<T> {
    /// A `201` reply.
    pub fn created(body: Envelope<T>) -> Self {
        Self {
            status: STATUS_CREATED,
            body,
        }
    }

    /// A `202` reply.
    pub fn accepted(body: Envelope<T>) -> Self {
        Self {
            status: STATUS_ACCEPTED,
            body,
        }
    }
}
