//! Capabilities a resource type exposes to generic repositories and controllers.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::result::AppResult;

/// A storable resource record with an opaque string identifier.
///
/// Records double as their own patch type: on update, fields present in
/// the patch overwrite the stored ones and absent fields are kept.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Singular resource name, used in messages and tracing spans.
    const RESOURCE: &'static str;

    /// Field names that may be used as a search key.
    const FIELDS: &'static [&'static str];

    /// The storage-assigned identifier, if one has been assigned.
    fn id(&self) -> Option<&str>;

    /// Overwrite the identifier.
    fn set_id(&mut self, id: String);

    /// Value of one of [`Record::FIELDS`], `None` when unset or unknown.
    fn field(&self, key: &str) -> Option<&str>;

    /// Value that must be unique across the collection, if present.
    fn unique_key(&self) -> Option<&str>;

    /// Reject records missing fields the storage layer requires.
    fn check_required(&self) -> AppResult<()>;

    /// Merge the present fields of `patch` into `self`. Never changes the id.
    fn merge(&mut self, patch: Self);
}
