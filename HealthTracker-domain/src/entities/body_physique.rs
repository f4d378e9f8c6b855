use std::fmt;
use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Domain model for a body physique reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BodyPhysiqueReading {
    /// Body weight in kilograms
    pub weight_kg: Decimal,

    /// Body height in centimeters
    pub height_cm: Decimal,
}

impl BodyPhysiqueReading {
    /// Create a reading from weight and height
    pub fn new(weight_kg: Decimal, height_cm: Decimal) -> Self {
        Self { weight_kg, height_cm }
    }

    /// Height converted to meters
    pub fn height_in_meters(&self) -> Decimal {
        self.height_cm * Decimal::new(1, 2)
    }
}

/// Body physique state derived from BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BodyPhysiqueState {
    /// BMI up to 18.49
    Under,

    /// BMI 18.5 to 24.99
    Normal,

    /// BMI 25 to 29.99
    Over,

    /// BMI 30 and up
    Obese,
}

impl BodyPhysiqueState {
    /// Every state, in order of severity
    pub const ALL: [BodyPhysiqueState; 4] = [
        BodyPhysiqueState::Under,
        BodyPhysiqueState::Normal,
        BodyPhysiqueState::Over,
        BodyPhysiqueState::Obese,
    ];

    /// Machine key of the state
    pub fn key(self) -> &'static str {
        match self {
            BodyPhysiqueState::Under => "under",
            BodyPhysiqueState::Normal => "normal",
            BodyPhysiqueState::Over => "over",
            BodyPhysiqueState::Obese => "obese",
        }
    }

    /// Human-readable label of the state
    pub fn label(self) -> &'static str {
        match self {
            BodyPhysiqueState::Under => "Underweight",
            BodyPhysiqueState::Normal => "Normal weight",
            BodyPhysiqueState::Over => "Overweight",
            BodyPhysiqueState::Obese => "Obesity",
        }
    }

    /// Parse a machine key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.key() == key)
    }

    /// Whether the state carries a penalty score
    pub fn is_penalized(self) -> bool {
        matches!(self, BodyPhysiqueState::Over | BodyPhysiqueState::Obese)
    }
}

impl fmt::Display for BodyPhysiqueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a body physique reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BodyPhysiqueClassification {
    /// Body mass index, two decimals
    pub bmi: Decimal,

    /// Clinical state
    pub state: BodyPhysiqueState,

    /// Human-readable label of the state
    pub label: String,

    /// Penalty score, zero unless over or obese
    pub penalty: i64,
}
