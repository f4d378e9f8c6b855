use health_tracker_data::models::health_record::{
    HealthRecordRow, RECORD_TYPE_BLOOD_PRESSURE, RECORD_TYPE_BODY_PHYSIQUE,
};

use crate::entities::blood_pressure::BloodPressureReading;
use crate::entities::body_physique::BodyPhysiqueReading;
use crate::entities::health_record::{HealthRecord, Measurement, RecordType};
use crate::services::validation::ClassificationError;

// Conversion functions between domain entities and data models
// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Why a stored row could not become a domain record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowConversionError {
    /// The row's type tag and columns do not describe a reading
    Unclassified(String),
    /// The row carries a reading that cannot be classified
    Classification(ClassificationError),
}

/// Type of the reading a stored row carries.
///
/// The tag column must agree with the populated columns; anything else is
/// `Unknown`.
pub fn record_type_of_row(row: &HealthRecordRow) -> RecordType {
    match convert_to_domain_measurement(row) {
        Some(measurement) => measurement.record_type(),
        None => RecordType::Unknown,
    }
}

/// Rebuild the reading from a stored row's columns
pub fn convert_to_domain_measurement(row: &HealthRecordRow) -> Option<Measurement> {
    match RecordType::parse(&row.record_type) {
        RecordType::BloodPressure => match (row.systolic_pressure, row.diastolic_pressure) {
            (Some(systolic), Some(diastolic)) => Some(Measurement::BloodPressure(
                BloodPressureReading::new(systolic, diastolic),
            )),
            _ => None,
        },
        RecordType::BodyPhysique => match (row.weight_in_kilograms, row.height_in_centimeters) {
            (Some(weight_kg), Some(height_cm)) => Some(Measurement::BodyPhysique(
                BodyPhysiqueReading::new(weight_kg, height_cm),
            )),
            _ => None,
        },
        RecordType::Unknown => None,
    }
}

/// Convert from data model to domain entity for a health record
pub fn convert_to_domain_record(row: HealthRecordRow) -> Result<HealthRecord, RowConversionError> {
    let measurement = convert_to_domain_measurement(&row).ok_or_else(|| {
        RowConversionError::Unclassified(format!(
            "record {} has no reading attached (type '{}')",
            row.id, row.record_type
        ))
    })?;

    let classification = measurement
        .classify()
        .map_err(RowConversionError::Classification)?;

    Ok(HealthRecord {
        id: row.id,
        owner_id: row.owner_id,
        measurement,
        classification,
        record_date: row.record_date,
        details: row.details,
        key_words: row.key_words,
        is_active: row.is_active,
        created: row.created,
        date_updated: row.date_updated,
    })
}

/// Convert from domain entity to data model for a health record
pub fn convert_to_data_row(record: &HealthRecord) -> HealthRecordRow {
    let mut row = HealthRecordRow {
        id: record.id.clone(),
        owner_id: record.owner_id.clone(),
        record_type: String::new(),
        systolic_pressure: None,
        diastolic_pressure: None,
        weight_in_kilograms: None,
        height_in_centimeters: None,
        record_date: record.record_date,
        details: record.details.clone(),
        key_words: record.key_words.clone(),
        is_active: record.is_active,
        created: record.created,
        date_updated: record.date_updated,
    };

    match record.measurement {
        Measurement::BloodPressure(reading) => {
            row.record_type = RECORD_TYPE_BLOOD_PRESSURE.to_string();
            row.systolic_pressure = Some(reading.systolic);
            row.diastolic_pressure = Some(reading.diastolic);
        }
        Measurement::BodyPhysique(reading) => {
            row.record_type = RECORD_TYPE_BODY_PHYSIQUE.to_string();
            row.weight_in_kilograms = Some(reading.weight_kg);
            row.height_in_centimeters = Some(reading.height_cm);
        }
    }

    row
}
