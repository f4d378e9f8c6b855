use chrono::{DateTime, Utc};
use tracing::debug;
use async_trait::async_trait;

use crate::models::health_record::HealthRecordRow;
use super::errors::RepositoryError;
use super::in_memory::InMemoryStorage;

/// Repository trait for health records
#[async_trait]
pub trait HealthRecordRepositoryTrait: Send + Sync {
    /// Insert or replace a health record
    async fn save(&self, record: HealthRecordRow) -> Result<HealthRecordRow, RepositoryError>;

    /// Replace a record only while it is still active
    async fn update(&self, record: HealthRecordRow) -> Result<HealthRecordRow, RepositoryError>;

    /// Get a health record by ID, including inactive ones
    async fn get_by_id(&self, id: &str) -> Result<Option<HealthRecordRow>, RepositoryError>;

    /// Get an owner's active records, optionally restricted to one record type
    async fn get_active(
        &self,
        owner_id: &str,
        record_type: Option<String>,
    ) -> Result<Vec<HealthRecordRow>, RepositoryError>;

    /// Get the owner's active record of a type with the latest record date
    async fn get_latest(
        &self,
        owner_id: &str,
        record_type: &str,
    ) -> Result<Option<HealthRecordRow>, RepositoryError>;

    /// Search an owner's active records by key words
    async fn search(&self, owner_id: &str, query: &str) -> Result<Vec<HealthRecordRow>, RepositoryError>;

    /// Soft-delete an active record
    async fn deactivate(&self, id: &str, updated_at: DateTime<Utc>) -> Result<HealthRecordRow, RepositoryError>;

    /// Total number of stored records
    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// Repository for health records backed by in-memory storage.
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct HealthRecordRepository {
    storage: InMemoryStorage,
}

impl HealthRecordRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
        }
    }
}

#[async_trait]
impl HealthRecordRepositoryTrait for HealthRecordRepository {
    async fn save(&self, record: HealthRecordRow) -> Result<HealthRecordRow, RepositoryError> {
        debug!("Storing health record {} ({})", record.id, record.record_type);
        self.storage.store_record(&record)
    }

    async fn update(&self, record: HealthRecordRow) -> Result<HealthRecordRow, RepositoryError> {
        debug!("Updating health record {}", record.id);
        self.storage.replace_active(&record)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<HealthRecordRow>, RepositoryError> {
        debug!("Getting health record by ID: {}", id);
        self.storage.get_by_id(id)
    }

    async fn get_active(
        &self,
        owner_id: &str,
        record_type: Option<String>,
    ) -> Result<Vec<HealthRecordRow>, RepositoryError> {
        debug!("Getting active records for owner {} (type: {:?})", owner_id, record_type);
        self.storage.get_active(owner_id, record_type.as_deref())
    }

    async fn get_latest(
        &self,
        owner_id: &str,
        record_type: &str,
    ) -> Result<Option<HealthRecordRow>, RepositoryError> {
        debug!("Getting latest {} record for owner {}", record_type, owner_id);
        self.storage.get_latest(owner_id, record_type)
    }

    async fn search(&self, owner_id: &str, query: &str) -> Result<Vec<HealthRecordRow>, RepositoryError> {
        debug!("Searching records of owner {} for '{}'", owner_id, query);
        self.storage.search(owner_id, query)
    }

    async fn deactivate(&self, id: &str, updated_at: DateTime<Utc>) -> Result<HealthRecordRow, RepositoryError> {
        debug!("Deactivating health record {}", id);
        self.storage.deactivate(id, updated_at)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        self.storage.count()
    }
}
