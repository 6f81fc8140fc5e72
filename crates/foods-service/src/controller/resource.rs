//! Validate, delegate, shape: the five resource operations.
//!
//! Each operation either returns a [`Reply`] or an [`AppError`]; nothing
//! is written to the transport here, so a failed operation can never
//! produce a second response.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{Instrument, Span, debug, info_span};

use foods_core::error::AppError;
use foods_core::result::AppResult;
use foods_core::traits::{Record, Repository};
use foods_core::types::{Envelope, FilterPolicy, FilterSelection, PageSelection, Reply};

/// Raw list query parameters, as decoded from the query string.
pub type QueryParams = HashMap<String, String>;

/// Path parameters of single-record routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResourceParams {
    /// Record identifier.
    #[serde(default)]
    pub id: Option<String>,
}

impl ResourceParams {
    /// Params carrying the given id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Generic controller for one resource type.
///
/// Holds its repository and list filter by injection; the tracing span
/// every operation runs in is injected too (defaults to a `controller`
/// span tagged with the resource name).
pub struct ResourceController<T: Record> {
    repo: Arc<dyn Repository<T>>,
    filter: FilterPolicy,
    span: Span,
}

impl<T: Record> Clone for ResourceController<T> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            filter: self.filter,
            span: self.span.clone(),
        }
    }
}

impl<T: Record> fmt::Debug for ResourceController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceController")
            .field("resource", &T::RESOURCE)
            .field("filter", &self.filter)
            .finish()
    }
}

impl<T: Record> ResourceController<T> {
    /// Creates a controller over `repo` filtering lists with `filter`.
    pub fn new(repo: Arc<dyn Repository<T>>, filter: FilterPolicy) -> Self {
        Self {
            repo,
            filter,
            span: info_span!("controller", resource = T::RESOURCE),
        }
    }

    /// Replaces the span operations are recorded under.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The list filter this controller accepts.
    pub fn filter(&self) -> FilterPolicy {
        self.filter
    }

    /// Stores a new record. The repository's rejection is forwarded as-is.
    pub async fn post(&self, body: T) -> AppResult<Reply<T>> {
        async {
            let created = self.repo.create(body).await?;
            debug!(id = created.id().unwrap_or_default(), "Record created");
            Ok(Reply::created(Envelope::one(created)))
        }
        .instrument(self.span.clone())
        .await
    }

    /// Lists one page of records, optionally filtered.
    ///
    /// The page number is checked before the filter value; neither check
    /// touches the repository when it fails.
    pub async fn get_all(&self, query: &QueryParams) -> AppResult<Reply<T>> {
        async {
            let page = PageSelection::parse(query.get("page").map(String::as_str))?;
            let selection = self
                .filter
                .select(query.get(self.filter.key).map(String::as_str))?;
            debug!(page = page.page(), filter = ?selection, "Listing records");

            let fetched = match selection {
                FilterSelection::All => self.repo.query_all().await?,
                FilterSelection::Matching(predicate) => self.repo.search(&predicate).await?,
            };

            debug!(fetched = fetched.len(), "Records fetched");
            Ok(Reply::created(Envelope::many(page.slice(fetched))))
        }
        .instrument(self.span.clone())
        .await
    }

    /// Fetches one record by id.
    pub async fn get_id(&self, params: &ResourceParams) -> AppResult<Reply<T>> {
        async {
            let id = require_id::<T>(params)?;
            let record = self.repo.query_id(id).await?;
            Ok(Reply::created(Envelope::one(record)))
        }
        .instrument(self.span.clone())
        .await
    }

    /// Merges `body` into the record named by the path id.
    ///
    /// The path id always wins over any id carried in the body.
    pub async fn edit(&self, params: &ResourceParams, mut body: T) -> AppResult<Reply<T>> {
        async {
            let id = require_id::<T>(params)?;
            body.set_id(id.to_string());
            let updated = self.repo.update(body).await?;
            debug!(id, "Record updated");
            Ok(Reply::created(Envelope::one(updated)))
        }
        .instrument(self.span.clone())
        .await
    }

    /// Deletes the record named by the path id.
    pub async fn delete(&self, params: &ResourceParams) -> AppResult<Reply<T>> {
        async {
            let id = require_id::<T>(params)?;
            self.repo.delete(id).await?;
            debug!(id, "Record deleted");
            Ok(Reply::created(Envelope::empty()))
        }
        .instrument(self.span.clone())
        .await
    }
}

fn require_id<T: Record>(params: &ResourceParams) -> AppResult<&str> {
    match params.id.as_deref() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::not_found(
            "Not found",
            format!("{} id not found in params", T::RESOURCE),
        )),
    }
}
