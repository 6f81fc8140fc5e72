//! Generic repository trait for storage access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::record::Record;
use crate::types::filter::SearchPredicate;

/// Storage-agnostic CRUD and search contract over one record type.
///
/// This is the only interface request handling depends on. Each operation
/// is atomic from the caller's perspective; composing several calls into a
/// transaction is the backing's concern.
#[async_trait]
pub trait Repository<T>: Send + Sync + 'static
where
    T: Record,
{
    /// Return every record in insertion order.
    async fn query_all(&self) -> AppResult<Vec<T>>;

    /// Return the record with the given identifier, or `NotFound`.
    async fn query_id(&self, id: &str) -> AppResult<T>;

    /// Persist a new record and return it with its assigned identifier.
    ///
    /// Fails with `Conflict` when a uniqueness constraint is violated.
    async fn create(&self, record: T) -> AppResult<T>;

    /// Merge the fields of `record` into the stored record with the same
    /// identifier and return the result, or `NotFound`.
    async fn update(&self, record: T) -> AppResult<T>;

    /// Remove the record. Deleting a missing identifier is `NotFound`.
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// Return all records matching the predicate. Empty is not an error.
    async fn search(&self, predicate: &SearchPredicate) -> AppResult<Vec<T>>;
}
