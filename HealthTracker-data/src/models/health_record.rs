use serde::{Deserialize, Serialize};
use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;

/// Record type column value for blood pressure rows
pub const RECORD_TYPE_BLOOD_PRESSURE: &str = "blood_pressure";

/// Record type column value for body physique rows
pub const RECORD_TYPE_BODY_PHYSIQUE: &str = "body_physique";

/// Storage model for a health record.
///
/// One row holds either a blood pressure reading or a body physique reading;
/// the columns of the other kind stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecordRow {
    /// Unique identifier for the record
    pub id: String,

    /// Owner of the record
    pub owner_id: String,

    /// Which reading kind the row carries
    pub record_type: String,

    /// Systolic blood pressure (the higher number)
    pub systolic_pressure: Option<u16>,

    /// Diastolic blood pressure (the lower number)
    pub diastolic_pressure: Option<u16>,

    /// Body weight in kilograms
    pub weight_in_kilograms: Option<Decimal>,

    /// Body height in centimeters
    pub height_in_centimeters: Option<Decimal>,

    /// When the measurement was taken, in the owner's offset
    pub record_date: DateTime<FixedOffset>,

    /// Free-form details about the record
    pub details: String,

    /// Derived search text
    pub key_words: String,

    /// Soft-delete flag
    pub is_active: bool,

    /// When the row was first stored
    pub created: DateTime<Utc>,

    /// When the row was last stored
    pub date_updated: DateTime<Utc>,
}

impl HealthRecordRow {
    /// Whether the row matches a case-insensitive key words query
    pub fn matches_key_words(&self, query: &str) -> bool {
        self.key_words
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}
