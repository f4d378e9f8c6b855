// Repository module structure
pub mod errors;
mod health_record;
mod in_memory;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use health_record::{HealthRecordRepository, HealthRecordRepositoryTrait};
