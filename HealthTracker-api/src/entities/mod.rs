// Public entities for the HealthTracker API
// This module contains data structures that are shared across the application boundary

// Classifier requests and responses
pub mod classification;

// Health record requests and responses
pub mod records;

// Common entities for error handling
pub mod common;
