// HealthTracker Domain
// This crate contains the business logic for the HealthTracker application:
// measurement classification, record indexing and the record service.

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Time source for record saves
pub mod clock;

// Health checks and system status
pub mod health;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;

// Re-export common types
pub use crate::entities::{
    BloodPressureReading, BloodPressureState, BodyPhysiqueReading, BodyPhysiqueState,
    HealthRecord, Measurement, RecordType,
};
pub use crate::services::{build_key_words, classify_blood_pressure, classify_body_physique};
