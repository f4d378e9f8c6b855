//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use async_trait::async_trait;
use tracing::warn;

use health_tracker_data::repository::{HealthRecordRepository, HealthRecordRepositoryTrait};

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build the overall status from the worst component
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        SystemHealth { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the record storage.
    /// Returns the number of stored records, or an error if storage cannot be read
    async fn check_storage_status(&self) -> Result<usize, String>;
}

/// Health service backed by the record repository
#[derive(Debug, Clone)]
pub struct StorageHealthService<R: HealthRecordRepositoryTrait + std::fmt::Debug = HealthRecordRepository> {
    repository: R,
}

impl<R: HealthRecordRepositoryTrait + std::fmt::Debug> StorageHealthService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: HealthRecordRepositoryTrait + std::fmt::Debug> HealthServiceTrait for StorageHealthService<R> {
    async fn get_system_health(&self) -> SystemHealth {
        let storage = match self.check_storage_status().await {
            Ok(count) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: Some(format!("{} records stored", count)),
            },
            Err(e) => {
                warn!("Storage health check failed: {}", e);
                HealthComponent {
                    status: ComponentStatus::Unhealthy,
                    details: Some(e),
                }
            }
        };

        SystemHealth::from_components(
            vec![("storage".to_string(), storage)].into_iter().collect(),
        )
    }

    async fn check_storage_status(&self) -> Result<usize, String> {
        self.repository
            .count()
            .await
            .map_err(|e| format!("Storage error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_system_health() {
        let service = StorageHealthService::new(HealthRecordRepository::new());
        let health = service.get_system_health().await;

        assert_eq!(health.status, SystemStatus::Healthy);
        let storage = &health.components["storage"];
        assert_eq!(storage.status, ComponentStatus::Healthy);
        assert_eq!(storage.details.as_deref(), Some("0 records stored"));
    }

    #[test]
    fn test_worst_component_decides() {
        let component = |status| HealthComponent { status, details: None };

        let health = SystemHealth::from_components(
            vec![
                ("storage".to_string(), component(ComponentStatus::Healthy)),
                ("api".to_string(), component(ComponentStatus::Degraded)),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(health.status, SystemStatus::Degraded);

        let health = SystemHealth::from_components(
            vec![
                ("storage".to_string(), component(ComponentStatus::Unhealthy)),
                ("api".to_string(), component(ComponentStatus::Degraded)),
            ]
            .into_iter()
            .collect(),
        );
        assert_eq!(health.status, SystemStatus::Unhealthy);
    }
}
