// HealthTracker Data
// This crate handles storage of health records

// Repository implementations for data access
pub mod repository;

// Data storage models
pub mod models;
