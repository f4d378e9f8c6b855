use std::fmt;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::services::blood_pressure::{categorize_blood_pressure, is_diastolic_okay, is_systolic_okay};

/// Domain model for a blood pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureReading {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 1, max = 999, message = "Systolic must be between 1 and 999"))]
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 1, max = 999, message = "Diastolic must be between 1 and 999"))]
    pub diastolic: u16,
}

impl BloodPressureReading {
    /// Create a reading from systolic and diastolic pressures
    pub fn new(systolic: u16, diastolic: u16) -> Self {
        Self { systolic, diastolic }
    }

    /// Readable pressure, e.g. "120/80"
    pub fn pressure(&self) -> String {
        format!("{}/{}", self.systolic, self.diastolic)
    }

    /// Clinical state of the reading
    pub fn state(&self) -> BloodPressureState {
        categorize_blood_pressure(self.systolic, self.diastolic)
    }

    /// Whether systolic alone lies in the normal band
    pub fn is_systolic_okay(&self) -> bool {
        is_systolic_okay(self.systolic)
    }

    /// Whether diastolic alone lies in the normal band
    pub fn is_diastolic_okay(&self) -> bool {
        is_diastolic_okay(self.diastolic)
    }
}

/// Blood pressure state based on measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureState {
    /// Systolic 90-119 and diastolic 60-79
    Normal,

    /// Systolic 120-129 and diastolic 60-79
    Elevated,

    /// Systolic 130-139 or diastolic 80-89
    High,

    /// Systolic 140-180 or diastolic 90-120
    VeryHigh,

    /// Systolic 181 and up, or diastolic 121 and up
    Risky,

    /// Systolic 89 and below, or diastolic 59 and below
    Low,
}

impl BloodPressureState {
    /// Every state, mildest first
    pub const ALL: [BloodPressureState; 6] = [
        BloodPressureState::Low,
        BloodPressureState::Normal,
        BloodPressureState::Elevated,
        BloodPressureState::High,
        BloodPressureState::VeryHigh,
        BloodPressureState::Risky,
    ];

    /// Machine key of the state
    pub fn key(self) -> &'static str {
        match self {
            BloodPressureState::Normal => "normal",
            BloodPressureState::Elevated => "elevated",
            BloodPressureState::High => "high",
            BloodPressureState::VeryHigh => "very_high",
            BloodPressureState::Risky => "risky",
            BloodPressureState::Low => "low",
        }
    }

    /// Human-readable label of the state
    pub fn label(self) -> &'static str {
        match self {
            BloodPressureState::Normal => "Normal Blood Pressure",
            BloodPressureState::Elevated => "Elevated Hypertension",
            BloodPressureState::High => "Hypertension Stage I (High)",
            BloodPressureState::VeryHigh => "Hypertension Stage II (Very High)",
            BloodPressureState::Risky => "Hypertension Crisis (Risky)",
            BloodPressureState::Low => "Alarmingly Low",
        }
    }

    /// Parse a machine key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.key() == key)
    }
}

impl fmt::Display for BloodPressureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a blood pressure reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BloodPressureClassification {
    /// Clinical state
    pub state: BloodPressureState,

    /// Human-readable label of the state
    pub label: String,

    /// Readable pressure, e.g. "120/80"
    pub pressure: String,
}
