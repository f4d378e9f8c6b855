// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

use std::collections::HashMap;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use health_tracker_data::repository::HealthRecordRepository;

use crate::clock::FixedClock;
use crate::entities::health_record::{HealthRecord, NewHealthRecord, RecordType, UpdateHealthRecord};
use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth};
use crate::services::health_record::{HealthRecordService, HealthRecordServiceError, HealthRecordServiceTrait};

/// Record service over fresh in-memory storage with a frozen clock
pub fn create_test_health_record_service(
    at: DateTime<Utc>,
) -> HealthRecordService<HealthRecordRepository, FixedClock> {
    HealthRecordService::with_clock(HealthRecordRepository::new(), FixedClock(at))
}

/// Record service whose storage is always unavailable
#[derive(Debug, Default)]
pub struct FailingHealthRecordService;

impl FailingHealthRecordService {
    fn failure<T>() -> Result<T, HealthRecordServiceError> {
        Err(HealthRecordServiceError::RepositoryError(
            "Repository error - mock is configured to fail".to_string(),
        ))
    }
}

#[async_trait]
impl HealthRecordServiceTrait for FailingHealthRecordService {
    async fn create_record(&self, _record: NewHealthRecord) -> Result<HealthRecord, HealthRecordServiceError> {
        Self::failure()
    }

    async fn update_record(
        &self,
        _id: &str,
        _changes: UpdateHealthRecord,
    ) -> Result<HealthRecord, HealthRecordServiceError> {
        Self::failure()
    }

    async fn get_record(&self, _id: &str) -> Result<HealthRecord, HealthRecordServiceError> {
        Self::failure()
    }

    async fn list_records(
        &self,
        _owner_id: &str,
        _record_type: Option<RecordType>,
    ) -> Result<Vec<HealthRecord>, HealthRecordServiceError> {
        Self::failure()
    }

    async fn search_records(&self, _owner_id: &str, _query: &str) -> Result<Vec<HealthRecord>, HealthRecordServiceError> {
        Self::failure()
    }

    async fn deactivate_record(&self, _id: &str) -> Result<HealthRecord, HealthRecordServiceError> {
        Self::failure()
    }

    async fn latest_blood_pressure(&self, _owner_id: &str) -> Result<Option<HealthRecord>, HealthRecordServiceError> {
        Self::failure()
    }

    async fn latest_body_physique(&self, _owner_id: &str) -> Result<Option<HealthRecord>, HealthRecordServiceError> {
        Self::failure()
    }

    async fn latest_height(&self, _owner_id: &str) -> Result<Option<Decimal>, HealthRecordServiceError> {
        Self::failure()
    }
}

/// Mock implementation of health services for testing system health
#[derive(Debug)]
pub struct MockHealthService {
    /// Storage component status
    storage_status: ComponentStatus,
    /// Additional components
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a new mock health service with all components healthy
    pub fn new() -> Self {
        Self {
            storage_status: ComponentStatus::Healthy,
            components: HashMap::new(),
        }
    }

    /// Configure the mock with degraded storage
    pub fn with_degraded_storage(mut self) -> Self {
        self.storage_status = ComponentStatus::Degraded;
        self
    }

    /// Configure the mock with unavailable storage
    pub fn with_unhealthy_storage(mut self) -> Self {
        self.storage_status = ComponentStatus::Unhealthy;
        self
    }

    /// Add a custom component with a specific status
    pub fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<String>) -> Self {
        self.components.insert(name.to_string(), HealthComponent { status, details });
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = self.components.clone();
        components.insert(
            "storage".to_string(),
            HealthComponent {
                status: self.storage_status.clone(),
                details: match self.storage_status {
                    ComponentStatus::Healthy => None,
                    ComponentStatus::Degraded => Some("Storage is experiencing high load".to_string()),
                    ComponentStatus::Unhealthy => Some("Storage is unavailable".to_string()),
                },
            },
        );

        SystemHealth::from_components(components)
    }

    async fn check_storage_status(&self) -> Result<usize, String> {
        match self.storage_status {
            ComponentStatus::Unhealthy => Err("Storage is unavailable".to_string()),
            _ => Ok(0),
        }
    }
}

/// Factory function to create a mock health service
pub fn create_mock_health_service() -> impl HealthServiceTrait {
    MockHealthService::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::SystemStatus;

    #[tokio::test]
    async fn test_mock_health_service_reports_storage() {
        let health = MockHealthService::new().with_unhealthy_storage().get_system_health().await;
        assert_eq!(health.status, SystemStatus::Unhealthy);

        let health = MockHealthService::new()
            .with_component("cache", ComponentStatus::Degraded, None)
            .get_system_health()
            .await;
        assert_eq!(health.status, SystemStatus::Degraded);
        assert!(health.components.contains_key("storage"));
    }

    #[tokio::test]
    async fn test_failing_record_service_fails() {
        let result = FailingHealthRecordService.latest_height("alice").await;
        assert!(matches!(result, Err(HealthRecordServiceError::RepositoryError(_))));
    }
}
