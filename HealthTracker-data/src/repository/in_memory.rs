use std::sync::{Arc, Mutex};
use std::collections::HashMap;
use chrono::{DateTime, Utc};

use crate::models::health_record::HealthRecordRow;
use super::errors::RepositoryError;

/// In-memory storage implementation for health records
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    /// Storage for health records, keyed by id
    records: Arc<Mutex<HashMap<String, HealthRecordRow>>>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Insert or replace a record
    pub fn store_record(&self, record: &HealthRecordRow) -> Result<HealthRecordRow, RepositoryError> {
        if record.id.is_empty() || record.owner_id.is_empty() {
            return Err(RepositoryError::Validation(
                "record id and owner id must not be empty".to_string(),
            ));
        }

        let mut store = self.records.lock()?;
        store.insert(record.id.clone(), record.clone());
        Ok(record.clone())
    }

    /// Replace a record that is still active.
    /// Missing and deactivated records are NotFound, so a concurrent
    /// deactivation is never undone.
    pub fn replace_active(&self, record: &HealthRecordRow) -> Result<HealthRecordRow, RepositoryError> {
        let mut store = self.records.lock()?;
        match store.get(&record.id) {
            Some(existing) if existing.is_active => {
                store.insert(record.id.clone(), record.clone());
                Ok(record.clone())
            }
            _ => Err(RepositoryError::NotFound(record.id.clone())),
        }
    }

    /// Get a record by ID, active or not
    pub fn get_by_id(&self, id: &str) -> Result<Option<HealthRecordRow>, RepositoryError> {
        let store = self.records.lock()?;
        Ok(store.get(id).cloned())
    }

    /// Get an owner's active records, oldest record date first
    pub fn get_active(
        &self,
        owner_id: &str,
        record_type: Option<&str>,
    ) -> Result<Vec<HealthRecordRow>, RepositoryError> {
        let store = self.records.lock()?;

        let mut records: Vec<HealthRecordRow> = store
            .values()
            .filter(|record| record.is_active && record.owner_id == owner_id)
            .filter(|record| record_type.map_or(true, |kind| record.record_type == kind))
            .cloned()
            .collect();

        records.sort_by(|a, b| {
            a.record_date
                .cmp(&b.record_date)
                .then_with(|| a.created.cmp(&b.created))
        });

        Ok(records)
    }

    /// Get the latest active record of one kind for an owner
    pub fn get_latest(
        &self,
        owner_id: &str,
        record_type: &str,
    ) -> Result<Option<HealthRecordRow>, RepositoryError> {
        let records = self.get_active(owner_id, Some(record_type))?;
        Ok(records.into_iter().last())
    }

    /// Get an owner's active records whose key words contain the query
    pub fn search(&self, owner_id: &str, query: &str) -> Result<Vec<HealthRecordRow>, RepositoryError> {
        let records = self.get_active(owner_id, None)?;
        Ok(records
            .into_iter()
            .filter(|record| record.matches_key_words(query))
            .collect())
    }

    /// Mark an active record inactive; already inactive records are NotFound
    pub fn deactivate(&self, id: &str, updated_at: DateTime<Utc>) -> Result<HealthRecordRow, RepositoryError> {
        let mut store = self.records.lock()?;
        let record = store
            .get_mut(id)
            .filter(|record| record.is_active)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;

        record.is_active = false;
        record.date_updated = updated_at;
        Ok(record.clone())
    }

    /// Number of stored records, active or not
    pub fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.records.lock()?;
        Ok(store.len())
    }
}
