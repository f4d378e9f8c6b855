use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, FixedOffset, Utc};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::blood_pressure::{BloodPressureClassification, BloodPressureReading};
use crate::entities::body_physique::{BodyPhysiqueClassification, BodyPhysiqueReading};
use crate::services::blood_pressure::classify_blood_pressure;
use crate::services::body_physique::classify_body_physique;
use crate::services::validation::ClassificationError;

/// Details stored when a record is saved without any
pub const DEFAULT_DETAILS: &str = "No details provided";

/// Kind of reading a record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    BloodPressure,
    BodyPhysique,
    /// No reading attached
    Unknown,
}

impl RecordType {
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::BloodPressure => "blood_pressure",
            RecordType::BodyPhysique => "body_physique",
            RecordType::Unknown => "unknown",
        }
    }

    /// Parse a stored type tag; anything unrecognized is `Unknown`
    pub fn parse(value: &str) -> Self {
        match value {
            "blood_pressure" => RecordType::BloodPressure,
            "body_physique" => RecordType::BodyPhysique,
            _ => RecordType::Unknown,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reading attached to a health record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measurement {
    BloodPressure(BloodPressureReading),
    BodyPhysique(BodyPhysiqueReading),
}

impl Measurement {
    /// Type tag of the reading
    pub fn record_type(&self) -> RecordType {
        match self {
            Measurement::BloodPressure(_) => RecordType::BloodPressure,
            Measurement::BodyPhysique(_) => RecordType::BodyPhysique,
        }
    }

    /// Classify the reading
    pub fn classify(&self) -> Result<Classification, ClassificationError> {
        match self {
            Measurement::BloodPressure(reading) => Ok(Classification::BloodPressure(
                classify_blood_pressure(reading.systolic, reading.diastolic),
            )),
            Measurement::BodyPhysique(reading) => Ok(Classification::BodyPhysique(
                classify_body_physique(reading.weight_kg, reading.height_cm)?,
            )),
        }
    }
}

/// Classification of a record's reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    BloodPressure(BloodPressureClassification),
    BodyPhysique(BodyPhysiqueClassification),
}

impl Classification {
    /// Human-readable state label, as indexed in key words
    pub fn label(&self) -> &str {
        match self {
            Classification::BloodPressure(c) => &c.label,
            Classification::BodyPhysique(c) => &c.label,
        }
    }
}

/// A saved health record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthRecord {
    /// Unique identifier for the record
    pub id: String,

    /// Owner of the record
    pub owner_id: String,

    /// The attached reading
    pub measurement: Measurement,

    /// Derived classification of the reading
    pub classification: Classification,

    /// When the measurement was taken, in the owner's offset
    pub record_date: DateTime<FixedOffset>,

    /// Free-form details
    pub details: String,

    /// Derived search text
    pub key_words: String,

    /// False once the record has been deleted
    pub is_active: bool,

    /// When the record was first saved
    pub created: DateTime<Utc>,

    /// When the record was last saved
    pub date_updated: DateTime<Utc>,
}

impl HealthRecord {
    /// Type tag of the attached reading
    pub fn record_type(&self) -> RecordType {
        self.measurement.record_type()
    }

    /// Human-readable state of the attached reading
    pub fn state(&self) -> &str {
        self.classification.label()
    }
}

/// A record that has not been saved yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewHealthRecord {
    /// Owner of the record
    pub owner_id: String,

    /// Offset of the owner's local time, used when `record_date` is absent
    pub owner_offset: FixedOffset,

    /// The reading; may still be missing while the record is being built
    pub measurement: Option<Measurement>,

    /// When the measurement was taken; defaults to now
    pub record_date: Option<DateTime<FixedOffset>>,

    /// Free-form details; defaults to [`DEFAULT_DETAILS`]
    pub details: Option<String>,
}

impl NewHealthRecord {
    /// Start a draft for an owner with no reading attached
    pub fn draft(owner_id: impl Into<String>, owner_offset: FixedOffset) -> Self {
        Self {
            owner_id: owner_id.into(),
            owner_offset,
            measurement: None,
            record_date: None,
            details: None,
        }
    }

    /// Attach a reading
    pub fn with_measurement(mut self, measurement: Measurement) -> Self {
        self.measurement = Some(measurement);
        self
    }

    /// Set the record date
    pub fn with_record_date(mut self, record_date: DateTime<FixedOffset>) -> Self {
        self.record_date = Some(record_date);
        self
    }

    /// Set the details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Type tag of the attached reading, `Unknown` while none is attached
    pub fn record_type(&self) -> RecordType {
        self.measurement
            .as_ref()
            .map_or(RecordType::Unknown, Measurement::record_type)
    }
}

/// Changes applied to a saved record; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateHealthRecord {
    pub measurement: Option<Measurement>,
    pub record_date: Option<DateTime<FixedOffset>>,
    pub details: Option<String>,
}
