pub mod health;
pub mod classification;
pub mod records;

// Re-export handlers for easier imports
pub use classification::{classify_blood_pressure, classify_body_physique};
pub use health::health_check;
pub use records::{
    create_record, delete_record, get_record, latest_blood_pressure, latest_body_physique, latest_height,
    list_records, update_record,
};
