// Domain entities and value objects
pub mod blood_pressure;
pub mod body_physique;
pub mod health_record;
pub mod conversions;

// Re-export common types for easier imports
pub use blood_pressure::{BloodPressureClassification, BloodPressureReading, BloodPressureState};
pub use body_physique::{BodyPhysiqueClassification, BodyPhysiqueReading, BodyPhysiqueState};
pub use health_record::{
    Classification, HealthRecord, Measurement, NewHealthRecord, RecordType, UpdateHealthRecord,
    DEFAULT_DETAILS,
};
