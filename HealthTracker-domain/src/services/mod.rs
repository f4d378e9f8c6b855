pub mod blood_pressure;
pub mod body_physique;
pub mod key_words;
pub mod validation;
pub mod health_record;

// Domain services
// This module contains business logic implementations.

// Re-export the classification core
pub use blood_pressure::classify_blood_pressure;
pub use body_physique::{classify_body_physique, strip_trailing_zero};
pub use key_words::build_key_words;
pub use validation::ClassificationError;

// Re-export service traits and factory functions
pub use health_record::{
    create_default_health_record_service, HealthRecordService, HealthRecordServiceError,
    HealthRecordServiceTrait,
};
