//! In-memory repository usable for any record type.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use foods_core::error::AppError;
use foods_core::result::AppResult;
use foods_core::traits::{Record, Repository};
use foods_core::types::SearchPredicate;

use super::missing;

/// Insertion-ordered, process-local collection of records.
///
/// Enforces the same required-field and uniqueness rules as the
/// PostgreSQL backings so either can sit behind a controller.
#[derive(Debug)]
pub struct MemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Record> MemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the repository holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn duplicate<T: Record>(key: &str) -> AppError {
    AppError::conflict(
        format!("The {} already exists", T::RESOURCE),
        format!("Duplicate key '{key}'"),
    )
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryRepository<T> {
    async fn query_all(&self) -> AppResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn query_id(&self, id: &str) -> AppResult<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
            .ok_or_else(|| missing(id, T::RESOURCE))
    }

    async fn create(&self, mut record: T) -> AppResult<T> {
        record.check_required()?;

        let mut records = self.records.write().await;
        if let Some(key) = record.unique_key() {
            if records.iter().any(|r| r.unique_key() == Some(key)) {
                return Err(duplicate::<T>(key));
            }
        }

        record.set_id(Uuid::new_v4().to_string());
        records.push(record.clone());
        debug!(resource = T::RESOURCE, total = records.len(), "Record created");
        Ok(record)
    }

    async fn update(&self, record: T) -> AppResult<T> {
        let id = record.id().unwrap_or_default().to_string();

        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == Some(id.as_str()))
            .ok_or_else(|| missing(&id, T::RESOURCE))?;

        if let Some(key) = record.unique_key() {
            let taken = records
                .iter()
                .any(|r| r.id() != Some(id.as_str()) && r.unique_key() == Some(key));
            if taken {
                return Err(duplicate::<T>(key));
            }
        }

        let stored = &mut records[index];
        stored.merge(record);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == Some(id))
            .ok_or_else(|| missing(id, T::RESOURCE))?;
        records.remove(index);
        Ok(())
    }

    async fn search(&self, predicate: &SearchPredicate) -> AppResult<Vec<T>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| predicate.matches(*r))
            .cloned()
            .collect())
    }
}
