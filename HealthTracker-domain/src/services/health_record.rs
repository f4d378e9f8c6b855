use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use health_tracker_data::models::health_record::{
    HealthRecordRow, RECORD_TYPE_BLOOD_PRESSURE, RECORD_TYPE_BODY_PHYSIQUE,
};
use health_tracker_data::repository::{HealthRecordRepository, HealthRecordRepositoryTrait, RepositoryError};

use crate::clock::{Clock, SystemClock};
use crate::entities::conversions::{self, RowConversionError};
use crate::entities::health_record::{
    Classification, HealthRecord, Measurement, NewHealthRecord, RecordType, UpdateHealthRecord,
    DEFAULT_DETAILS,
};
use crate::services::key_words::build_key_words;
use crate::services::validation::{validate_measurement, ClassificationError};

/// Health record service errors
#[derive(Debug, Error)]
pub enum HealthRecordServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The record has no reading attached
    #[error("Unclassified state: {0}")]
    UnclassifiedState(String),

    /// Not found error
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ClassificationError> for HealthRecordServiceError {
    fn from(err: ClassificationError) -> Self {
        HealthRecordServiceError::ValidationError(err.to_string())
    }
}

impl From<RowConversionError> for HealthRecordServiceError {
    fn from(err: RowConversionError) -> Self {
        match err {
            RowConversionError::Unclassified(msg) => HealthRecordServiceError::UnclassifiedState(msg),
            RowConversionError::Classification(err) => err.into(),
        }
    }
}

/// Trait for health record service operations
#[async_trait]
pub trait HealthRecordServiceTrait: Send + Sync {
    /// Classify, index and save a new record
    async fn create_record(&self, record: NewHealthRecord) -> Result<HealthRecord, HealthRecordServiceError>;

    /// Apply changes to a saved record and save it again
    async fn update_record(
        &self,
        id: &str,
        changes: UpdateHealthRecord,
    ) -> Result<HealthRecord, HealthRecordServiceError>;

    /// Get a record by ID
    async fn get_record(&self, id: &str) -> Result<HealthRecord, HealthRecordServiceError>;

    /// Get an owner's active records, optionally of one type
    async fn list_records(
        &self,
        owner_id: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<HealthRecord>, HealthRecordServiceError>;

    /// Search an owner's active records by key words
    async fn search_records(&self, owner_id: &str, query: &str) -> Result<Vec<HealthRecord>, HealthRecordServiceError>;

    /// Soft-delete a record
    async fn deactivate_record(&self, id: &str) -> Result<HealthRecord, HealthRecordServiceError>;

    /// Latest active blood pressure record of an owner
    async fn latest_blood_pressure(&self, owner_id: &str) -> Result<Option<HealthRecord>, HealthRecordServiceError>;

    /// Latest active body physique record of an owner
    async fn latest_body_physique(&self, owner_id: &str) -> Result<Option<HealthRecord>, HealthRecordServiceError>;

    /// Height of the owner's latest body physique record
    async fn latest_height(&self, owner_id: &str) -> Result<Option<Decimal>, HealthRecordServiceError>;
}

/// Health record service for domain logic
pub struct HealthRecordService<R: HealthRecordRepositoryTrait, C: Clock = SystemClock> {
    repository: R,
    clock: C,
}

impl<R: HealthRecordRepositoryTrait> HealthRecordService<R> {
    /// Create a new health record service reading the wall clock
    pub fn new(repository: R) -> Self {
        Self::with_clock(repository, SystemClock)
    }
}

impl<R: HealthRecordRepositoryTrait, C: Clock> HealthRecordService<R, C> {
    /// Create a new health record service with a given clock
    pub fn with_clock(repository: R, clock: C) -> Self {
        Self { repository, clock }
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> HealthRecordServiceError {
        match err {
            RepositoryError::NotFound(msg) => HealthRecordServiceError::NotFound(msg),
            RepositoryError::Validation(msg) => HealthRecordServiceError::ValidationError(msg),
            _ => HealthRecordServiceError::RepositoryError(err.to_string()),
        }
    }

    /// Store a record and read back what was stored
    async fn save(&self, record: HealthRecord) -> Result<HealthRecord, HealthRecordServiceError> {
        let row = conversions::convert_to_data_row(&record);
        let saved = self.repository.save(row).await.map_err(|e| self.map_repo_error(e))?;
        Ok(conversions::convert_to_domain_record(saved)?)
    }

    /// Replace a record that must still be active when the write lands
    async fn replace(&self, record: HealthRecord) -> Result<HealthRecord, HealthRecordServiceError> {
        let row = conversions::convert_to_data_row(&record);
        let saved = self.repository.update(row).await.map_err(|e| self.map_repo_error(e))?;
        Ok(conversions::convert_to_domain_record(saved)?)
    }

    async fn latest_of(&self, owner_id: &str, record_type: &str) -> Result<Option<HealthRecord>, HealthRecordServiceError> {
        let row = self
            .repository
            .get_latest(owner_id, record_type)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        match row {
            Some(row) => Ok(Some(conversions::convert_to_domain_record(row)?)),
            None => Ok(None),
        }
    }

    fn convert_all(rows: Vec<HealthRecordRow>) -> Result<Vec<HealthRecord>, HealthRecordServiceError> {
        rows.into_iter()
            .map(|row| conversions::convert_to_domain_record(row).map_err(Into::into))
            .collect()
    }
}

/// Classify a reading and derive the key words of its record.
/// Runs on every save so the stored key words always match the reading.
fn derive_index(
    measurement: &Measurement,
    record_date: &DateTime<FixedOffset>,
) -> Result<(Classification, String), ClassificationError> {
    validate_measurement(measurement)?;
    let classification = measurement.classify()?;
    let key_words = build_key_words(record_date, classification.label());
    Ok((classification, key_words))
}

#[async_trait]
impl<R, C> HealthRecordServiceTrait for HealthRecordService<R, C>
where
    R: HealthRecordRepositoryTrait,
    C: Clock,
{
    #[instrument(skip(self, record), fields(owner_id = %record.owner_id))]
    async fn create_record(&self, record: NewHealthRecord) -> Result<HealthRecord, HealthRecordServiceError> {
        let measurement = record.measurement.ok_or_else(|| {
            warn!("Rejected record without a reading");
            HealthRecordServiceError::UnclassifiedState(format!(
                "record for owner {} has no reading attached",
                record.owner_id
            ))
        })?;

        // One clock read per save
        let now = self.clock.now();
        let record_date = record
            .record_date
            .unwrap_or_else(|| now.with_timezone(&record.owner_offset));
        let details = record.details.unwrap_or_else(|| DEFAULT_DETAILS.to_string());

        let (classification, key_words) = derive_index(&measurement, &record_date)?;

        let record = HealthRecord {
            id: Uuid::new_v4().to_string(),
            owner_id: record.owner_id,
            measurement,
            classification,
            record_date,
            details,
            key_words,
            is_active: true,
            created: now,
            date_updated: now,
        };

        let saved = self.save(record).await?;
        info!("Saved {} record {} as '{}'", saved.record_type(), saved.id, saved.state());
        Ok(saved)
    }

    #[instrument(skip(self, changes))]
    async fn update_record(
        &self,
        id: &str,
        changes: UpdateHealthRecord,
    ) -> Result<HealthRecord, HealthRecordServiceError> {
        let mut record = self.get_record(id).await?;
        if !record.is_active {
            return Err(HealthRecordServiceError::NotFound(format!("Health record {} is inactive", id)));
        }

        if let Some(measurement) = changes.measurement {
            record.measurement = measurement;
        }
        if let Some(record_date) = changes.record_date {
            record.record_date = record_date;
        }
        if let Some(details) = changes.details {
            record.details = details;
        }

        let (classification, key_words) = derive_index(&record.measurement, &record.record_date)?;
        record.classification = classification;
        record.key_words = key_words;
        record.date_updated = self.clock.now();

        let saved = self.replace(record).await?;
        info!("Updated record {} as '{}'", saved.id, saved.state());
        Ok(saved)
    }

    async fn get_record(&self, id: &str) -> Result<HealthRecord, HealthRecordServiceError> {
        let row = self
            .repository
            .get_by_id(id)
            .await
            .map_err(|e| self.map_repo_error(e))?
            .ok_or_else(|| HealthRecordServiceError::NotFound(format!("Health record with ID {} not found", id)))?;

        Ok(conversions::convert_to_domain_record(row)?)
    }

    async fn list_records(
        &self,
        owner_id: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<HealthRecord>, HealthRecordServiceError> {
        let tag = match record_type {
            Some(RecordType::Unknown) => {
                return Err(HealthRecordServiceError::ValidationError(
                    "cannot list records of unknown type".to_string(),
                ))
            }
            Some(kind) => Some(kind.as_str().to_string()),
            None => None,
        };

        debug!("Listing records of owner {} (type: {:?})", owner_id, tag);
        let rows = self
            .repository
            .get_active(owner_id, tag)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Self::convert_all(rows)
    }

    async fn search_records(&self, owner_id: &str, query: &str) -> Result<Vec<HealthRecord>, HealthRecordServiceError> {
        let rows = self
            .repository
            .search(owner_id, query)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        Self::convert_all(rows)
    }

    #[instrument(skip(self))]
    async fn deactivate_record(&self, id: &str) -> Result<HealthRecord, HealthRecordServiceError> {
        let row = self
            .repository
            .deactivate(id, self.clock.now())
            .await
            .map_err(|e| self.map_repo_error(e))?;

        info!("Deactivated record {}", id);
        Ok(conversions::convert_to_domain_record(row)?)
    }

    async fn latest_blood_pressure(&self, owner_id: &str) -> Result<Option<HealthRecord>, HealthRecordServiceError> {
        self.latest_of(owner_id, RECORD_TYPE_BLOOD_PRESSURE).await
    }

    async fn latest_body_physique(&self, owner_id: &str) -> Result<Option<HealthRecord>, HealthRecordServiceError> {
        self.latest_of(owner_id, RECORD_TYPE_BODY_PHYSIQUE).await
    }

    async fn latest_height(&self, owner_id: &str) -> Result<Option<Decimal>, HealthRecordServiceError> {
        let latest = self.latest_body_physique(owner_id).await?;
        Ok(latest.and_then(|record| match record.measurement {
            Measurement::BodyPhysique(reading) => Some(reading.height_cm),
            Measurement::BloodPressure(_) => None,
        }))
    }
}

/// Create a default health record service using the repository from data layer
pub fn create_default_health_record_service() -> impl HealthRecordServiceTrait {
    HealthRecordService::new(HealthRecordRepository::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockall::mock;
    use crate::clock::FixedClock;
    use crate::entities::blood_pressure::{BloodPressureReading, BloodPressureState};
    use crate::entities::body_physique::BodyPhysiqueReading;

    mock! {
        pub Repository {}

        #[async_trait]
        impl HealthRecordRepositoryTrait for Repository {
            async fn save(&self, record: HealthRecordRow) -> Result<HealthRecordRow, RepositoryError>;
            async fn update(&self, record: HealthRecordRow) -> Result<HealthRecordRow, RepositoryError>;
            async fn get_by_id(&self, id: &str) -> Result<Option<HealthRecordRow>, RepositoryError>;
            async fn get_active(
                &self,
                owner_id: &str,
                record_type: Option<String>,
            ) -> Result<Vec<HealthRecordRow>, RepositoryError>;
            async fn get_latest(
                &self,
                owner_id: &str,
                record_type: &str,
            ) -> Result<Option<HealthRecordRow>, RepositoryError>;
            async fn search(&self, owner_id: &str, query: &str) -> Result<Vec<HealthRecordRow>, RepositoryError>;
            async fn deactivate(&self, id: &str, updated_at: DateTime<Utc>) -> Result<HealthRecordRow, RepositoryError>;
            async fn count(&self) -> Result<usize, RepositoryError>;
        }
    }

    fn offset_hours(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap()
    }

    fn service_at(
        repository: HealthRecordRepository,
        at: DateTime<Utc>,
    ) -> HealthRecordService<HealthRecordRepository, FixedClock> {
        HealthRecordService::with_clock(repository, FixedClock(at))
    }

    fn blood_pressure(systolic: u16, diastolic: u16) -> Measurement {
        Measurement::BloodPressure(BloodPressureReading::new(systolic, diastolic))
    }

    fn body_physique(weight_kg: i64, height_cm: i64) -> Measurement {
        Measurement::BodyPhysique(BodyPhysiqueReading::new(Decimal::from(weight_kg), Decimal::from(height_cm)))
    }

    #[tokio::test]
    async fn test_create_record_defaults_date_and_details() {
        let service = service_at(HealthRecordRepository::new(), now());
        let draft = NewHealthRecord::draft("alice", offset_hours(2)).with_measurement(blood_pressure(119, 70));

        let record = service.create_record(draft).await.unwrap();

        // Local time of the owner: 14:07 UTC is 16:07 at +02:00
        assert_eq!(record.record_date, now().with_timezone(&offset_hours(2)));
        assert_eq!(record.details, DEFAULT_DETAILS);
        assert_eq!(record.key_words, "March 05, 2024 04 07 04:07 PM Normal Blood Pressure");
        assert_eq!(record.created, now());
        assert_eq!(record.date_updated, now());
        assert!(record.is_active);
        assert_eq!(record.record_type(), RecordType::BloodPressure);
    }

    #[tokio::test]
    async fn test_create_record_keeps_supplied_date_and_details() {
        let service = service_at(HealthRecordRepository::new(), now());
        let taken = offset_hours(-5).with_ymd_and_hms(2023, 11, 2, 7, 45, 0).unwrap();
        let draft = NewHealthRecord::draft("alice", offset_hours(0))
            .with_measurement(body_physique(100, 175))
            .with_record_date(taken)
            .with_details("Morning weigh-in");

        let record = service.create_record(draft).await.unwrap();

        assert_eq!(record.record_date, taken);
        assert_eq!(record.details, "Morning weigh-in");
        assert_eq!(record.key_words, "November 02, 2023 07 45 07:45 AM Obesity");
        match record.classification {
            Classification::BodyPhysique(c) => {
                assert_eq!(c.bmi, Decimal::new(3265, 2));
                assert_eq!(c.penalty, -3);
            }
            other => panic!("unexpected classification {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_record_without_reading_is_unclassified() {
        // No expectations: touching the repository would panic
        let service = HealthRecordService::with_clock(MockRepository::new(), FixedClock(now()));
        let result = service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)))
            .await;

        assert!(matches!(result, Err(HealthRecordServiceError::UnclassifiedState(_))));
    }

    #[tokio::test]
    async fn test_create_record_rejects_out_of_domain_reading() {
        let service = HealthRecordService::with_clock(MockRepository::new(), FixedClock(now()));

        let result = service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(blood_pressure(0, 80)))
            .await;
        assert!(matches!(result, Err(HealthRecordServiceError::ValidationError(_))));

        let result = service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(body_physique(70, 0)))
            .await;
        assert!(matches!(result, Err(HealthRecordServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_record_saves_once_with_key_words() {
        let mut repository = MockRepository::new();
        repository
            .expect_save()
            .withf(|row: &HealthRecordRow| {
                row.record_type == RECORD_TYPE_BLOOD_PRESSURE
                    && row.systolic_pressure == Some(185)
                    && row.key_words.ends_with("Hypertension Crisis (Risky)")
            })
            .times(1)
            .returning(Ok);

        let service = HealthRecordService::with_clock(repository, FixedClock(now()));
        let record = service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(blood_pressure(185, 70)))
            .await
            .unwrap();

        match record.classification {
            Classification::BloodPressure(c) => assert_eq!(c.state, BloodPressureState::Risky),
            other => panic!("unexpected classification {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_repository_errors_are_mapped() {
        let mut repository = MockRepository::new();
        repository
            .expect_get_latest()
            .returning(|_, _| Err(RepositoryError::Lock("poisoned".to_string())));
        repository
            .expect_deactivate()
            .returning(|id, _| Err(RepositoryError::NotFound(id.to_string())));

        let service = HealthRecordService::with_clock(repository, FixedClock(now()));

        let result = service.latest_blood_pressure("alice").await;
        assert!(matches!(result, Err(HealthRecordServiceError::RepositoryError(_))));

        let result = service.deactivate_record("missing").await;
        assert!(matches!(result, Err(HealthRecordServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stored_row_without_reading_surfaces_unclassified() {
        let mut repository = MockRepository::new();
        repository.expect_get_by_id().returning(|id| {
            Ok(Some(HealthRecordRow {
                id: id.to_string(),
                owner_id: "alice".to_string(),
                record_type: "blood_pressure".to_string(),
                systolic_pressure: None,
                diastolic_pressure: None,
                weight_in_kilograms: None,
                height_in_centimeters: None,
                record_date: now().fixed_offset(),
                details: DEFAULT_DETAILS.to_string(),
                key_words: String::new(),
                is_active: true,
                created: now(),
                date_updated: now(),
            }))
        });

        let service = HealthRecordService::with_clock(repository, FixedClock(now()));
        let result = service.get_record("broken").await;
        assert!(matches!(result, Err(HealthRecordServiceError::UnclassifiedState(_))));
    }

    #[tokio::test]
    async fn test_update_record_rederives_key_words() {
        let repository = HealthRecordRepository::new();
        let created = service_at(repository.clone(), now())
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(blood_pressure(119, 70)))
            .await
            .unwrap();

        let later = now() + chrono::Duration::days(1);
        let updated = service_at(repository.clone(), later)
            .update_record(
                &created.id,
                UpdateHealthRecord {
                    measurement: Some(blood_pressure(145, 70)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.key_words, "March 05, 2024 02 07 02:07 PM Hypertension Stage II (Very High)");
        assert_eq!(updated.state(), "Hypertension Stage II (Very High)");
        assert_eq!(updated.created, now());
        assert_eq!(updated.date_updated, later);
        assert_eq!(updated.details, DEFAULT_DETAILS);

        let stored = service_at(repository, later).get_record(&created.id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_record_can_switch_date() {
        let repository = HealthRecordRepository::new();
        let service = service_at(repository, now());
        let created = service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(body_physique(70, 175)))
            .await
            .unwrap();

        let new_date = offset_hours(0).with_ymd_and_hms(2024, 1, 15, 9, 5, 0).unwrap();
        let updated = service
            .update_record(
                &created.id,
                UpdateHealthRecord {
                    record_date: Some(new_date),
                    details: Some("Corrected date".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.key_words, "January 15, 2024 09 05 09:05 AM Normal weight");
        assert_eq!(updated.details, "Corrected date");
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let service = service_at(HealthRecordRepository::new(), now());
        let result = service.update_record("missing", UpdateHealthRecord::default()).await;
        assert!(matches!(result, Err(HealthRecordServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_latest_queries_follow_record_date() {
        let service = service_at(HealthRecordRepository::new(), now());
        let at = |day: u32| offset_hours(0).with_ymd_and_hms(2024, 2, day, 8, 0, 0).unwrap();

        assert!(service.latest_body_physique("alice").await.unwrap().is_none());
        assert!(service.latest_height("alice").await.unwrap().is_none());

        for (day, height) in [(10, 180), (3, 170)] {
            service
                .create_record(
                    NewHealthRecord::draft("alice", offset_hours(0))
                        .with_measurement(body_physique(80, height))
                        .with_record_date(at(day)),
                )
                .await
                .unwrap();
        }
        service
            .create_record(
                NewHealthRecord::draft("alice", offset_hours(0))
                    .with_measurement(blood_pressure(100, 65))
                    .with_record_date(at(20)),
            )
            .await
            .unwrap();

        let latest = service.latest_body_physique("alice").await.unwrap().unwrap();
        assert_eq!(latest.record_date, at(10));
        assert_eq!(service.latest_height("alice").await.unwrap(), Some(Decimal::from(180)));

        let latest_pressure = service.latest_blood_pressure("alice").await.unwrap().unwrap();
        assert_eq!(latest_pressure.record_type(), RecordType::BloodPressure);
        assert!(service.latest_blood_pressure("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_search_and_deactivate() {
        let service = service_at(HealthRecordRepository::new(), now());
        let low = service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(blood_pressure(85, 55)))
            .await
            .unwrap();
        service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(body_physique(50, 175)))
            .await
            .unwrap();

        assert_eq!(service.list_records("alice", None).await.unwrap().len(), 2);
        let physique = service
            .list_records("alice", Some(RecordType::BodyPhysique))
            .await
            .unwrap();
        assert_eq!(physique.len(), 1);
        assert_eq!(physique[0].state(), "Underweight");

        let found = service.search_records("alice", "alarmingly").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, low.id);

        let deactivated = service.deactivate_record(&low.id).await.unwrap();
        assert!(!deactivated.is_active);
        assert!(service.search_records("alice", "alarmingly").await.unwrap().is_empty());
        assert_eq!(service.list_records("alice", None).await.unwrap().len(), 1);

        // Inactive records cannot be edited
        let result = service.update_record(&low.id, UpdateHealthRecord::default()).await;
        assert!(matches!(result, Err(HealthRecordServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_loses_to_concurrent_deactivation() {
        let mut repository = MockRepository::new();
        repository.expect_get_by_id().returning(|id| {
            Ok(Some(HealthRecordRow {
                id: id.to_string(),
                owner_id: "alice".to_string(),
                record_type: RECORD_TYPE_BLOOD_PRESSURE.to_string(),
                systolic_pressure: Some(118),
                diastolic_pressure: Some(76),
                weight_in_kilograms: None,
                height_in_centimeters: None,
                record_date: now().fixed_offset(),
                details: DEFAULT_DETAILS.to_string(),
                key_words: String::new(),
                is_active: true,
                created: now(),
                date_updated: now(),
            }))
        });
        // Deactivated after the read; the conditional write refuses it
        repository
            .expect_update()
            .times(1)
            .returning(|row| Err(RepositoryError::NotFound(row.id)));
        repository.expect_save().times(0);

        let service = HealthRecordService::with_clock(repository, FixedClock(now()));
        let changes = UpdateHealthRecord {
            details: Some("Edited".to_string()),
            ..UpdateHealthRecord::default()
        };
        let result = service.update_record("racy", changes).await;
        assert!(matches!(result, Err(HealthRecordServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_deactivate_inactive_record_is_not_found() {
        let service = service_at(HealthRecordRepository::new(), now());
        let record = service
            .create_record(NewHealthRecord::draft("alice", offset_hours(0)).with_measurement(blood_pressure(118, 76)))
            .await
            .unwrap();

        service.deactivate_record(&record.id).await.unwrap();
        let result = service.deactivate_record(&record.id).await;
        assert!(matches!(result, Err(HealthRecordServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_unknown_type_is_rejected() {
        let service = service_at(HealthRecordRepository::new(), now());
        let result = service.list_records("alice", Some(RecordType::Unknown)).await;
        assert!(matches!(result, Err(HealthRecordServiceError::ValidationError(_))));
    }
}
