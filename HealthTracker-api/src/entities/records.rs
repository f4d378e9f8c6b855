use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use health_tracker_domain::entities::{
    BloodPressureReading, BodyPhysiqueReading, Classification, HealthRecord, Measurement,
};
use health_tracker_domain::services::strip_trailing_zero;

/// Reading attached to a record request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeasurementPayload {
    /// Blood pressure pair
    BloodPressure { systolic: u16, diastolic: u16 },
    /// Weight and height
    BodyPhysique { weight_kg: Decimal, height_cm: Decimal },
}

impl From<MeasurementPayload> for Measurement {
    fn from(payload: MeasurementPayload) -> Self {
        match payload {
            MeasurementPayload::BloodPressure { systolic, diastolic } => {
                Measurement::BloodPressure(BloodPressureReading::new(systolic, diastolic))
            }
            MeasurementPayload::BodyPhysique { weight_kg, height_cm } => {
                Measurement::BodyPhysique(BodyPhysiqueReading::new(weight_kg, height_cm))
            }
        }
    }
}

/// Request payload for creating a new health record
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecordRequest {
    /// Owner of the record
    #[validate(length(min = 1, max = 128, message = "owner_id must be between 1 and 128 characters"))]
    pub owner_id: String,

    /// The reading; a record without one cannot be saved
    pub measurement: Option<MeasurementPayload>,

    /// When the measurement was taken. Defaults to now in the owner's offset.
    pub record_date: Option<DateTime<FixedOffset>>,

    /// Owner's UTC offset in minutes (-1439 to 1439), used when record_date is absent
    pub utc_offset_minutes: Option<i32>,

    /// Free-form details
    #[validate(length(max = 1000, message = "Details cannot exceed 1000 characters"))]
    pub details: Option<String>,
}

/// Request payload for updating an existing health record
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRecordRequest {
    /// Replacement reading
    pub measurement: Option<MeasurementPayload>,

    /// Replacement record date
    pub record_date: Option<DateTime<FixedOffset>>,

    /// Replacement details
    #[validate(length(max = 1000, message = "Details cannot exceed 1000 characters"))]
    pub details: Option<String>,
}

/// Query parameters for listing or searching records
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct RecordsQueryParams {
    /// Owner whose records are returned
    pub owner_id: String,

    /// Only records of this kind: blood_pressure or body_physique
    pub kind: Option<String>,

    /// Case-insensitive search over key words; takes precedence over kind
    pub q: Option<String>,
}

/// Public representation of a health record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRecordResponse {
    /// Unique identifier for the record
    pub id: String,

    /// Owner of the record
    pub owner_id: String,

    /// Kind of reading: blood_pressure or body_physique
    pub record_type: String,

    /// Systolic blood pressure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub systolic: Option<u16>,

    /// Diastolic blood pressure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<u16>,

    /// Readable pressure, e.g. "120/80"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<String>,

    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub weight_kg: Option<Decimal>,

    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub height_cm: Option<Decimal>,

    /// Body mass index
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub bmi: Option<Decimal>,

    /// Penalty score of a body physique reading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<i64>,

    /// Machine key of the state
    pub state: String,

    /// Human-readable state
    pub state_label: String,

    /// When the measurement was taken
    pub record_date: DateTime<FixedOffset>,

    /// Free-form details
    pub details: String,

    /// Derived search text
    pub key_words: String,

    /// False once the record has been deleted
    pub is_active: bool,

    /// When the record was created in the system
    pub created: DateTime<Utc>,

    /// When the record was last updated
    pub date_updated: DateTime<Utc>,
}

impl From<HealthRecord> for HealthRecordResponse {
    fn from(record: HealthRecord) -> Self {
        let mut response = HealthRecordResponse {
            id: record.id.clone(),
            owner_id: record.owner_id.clone(),
            record_type: record.record_type().to_string(),
            systolic: None,
            diastolic: None,
            pressure: None,
            weight_kg: None,
            height_cm: None,
            bmi: None,
            penalty: None,
            state: String::new(),
            state_label: record.state().to_string(),
            record_date: record.record_date,
            details: record.details,
            key_words: record.key_words,
            is_active: record.is_active,
            created: record.created,
            date_updated: record.date_updated,
        };

        match record.measurement {
            Measurement::BloodPressure(reading) => {
                response.systolic = Some(reading.systolic);
                response.diastolic = Some(reading.diastolic);
            }
            Measurement::BodyPhysique(reading) => {
                response.weight_kg = Some(strip_trailing_zero(reading.weight_kg));
                response.height_cm = Some(strip_trailing_zero(reading.height_cm));
            }
        }

        match record.classification {
            Classification::BloodPressure(c) => {
                response.state = c.state.key().to_string();
                response.pressure = Some(c.pressure);
            }
            Classification::BodyPhysique(c) => {
                response.state = c.state.key().to_string();
                response.bmi = Some(strip_trailing_zero(c.bmi));
                response.penalty = Some(c.penalty);
            }
        }

        response
    }
}

/// Height of an owner's latest body physique record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeightResponse {
    /// Owner of the record
    pub owner_id: String,

    /// Height in centimeters
    #[schema(value_type = String, example = "175")]
    pub height_cm: Decimal,
}
