use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use health_tracker_domain::entities::{BloodPressureClassification, BodyPhysiqueClassification};
use health_tracker_domain::services::strip_trailing_zero;

/// Request payload for classifying a blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClassifyBloodPressureRequest {
    /// Systolic blood pressure (the higher number)
    #[validate(range(min = 1, max = 999, message = "Systolic must be between 1 and 999"))]
    pub systolic: u16,

    /// Diastolic blood pressure (the lower number)
    #[validate(range(min = 1, max = 999, message = "Diastolic must be between 1 and 999"))]
    pub diastolic: u16,
}

/// Request payload for classifying a body physique reading.
/// Weight and height are decimals between 1 and 999 with at most two fractional digits.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassifyBodyPhysiqueRequest {
    /// Weight in kilograms
    #[schema(value_type = String, example = "70.5")]
    pub weight_kg: Decimal,

    /// Height in centimeters
    #[schema(value_type = String, example = "175")]
    pub height_cm: Decimal,
}

/// Classified blood pressure reading
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BloodPressureClassificationResponse {
    /// Machine key of the state, e.g. "very_high"
    pub state: String,

    /// Human-readable state
    pub label: String,

    /// Readable pressure, e.g. "120/80"
    pub pressure: String,
}

impl From<BloodPressureClassification> for BloodPressureClassificationResponse {
    fn from(classification: BloodPressureClassification) -> Self {
        Self {
            state: classification.state.key().to_string(),
            label: classification.label,
            pressure: classification.pressure,
        }
    }
}

/// Classified body physique reading
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BodyPhysiqueClassificationResponse {
    /// Body mass index, two decimals at most
    #[schema(value_type = String, example = "22.86")]
    pub bmi: Decimal,

    /// Machine key of the state, e.g. "obese"
    pub state: String,

    /// Human-readable state
    pub label: String,

    /// Penalty score; zero for under and normal weight
    pub penalty: i64,
}

impl From<BodyPhysiqueClassification> for BodyPhysiqueClassificationResponse {
    fn from(classification: BodyPhysiqueClassification) -> Self {
        Self {
            bmi: strip_trailing_zero(classification.bmi),
            state: classification.state.key().to_string(),
            label: classification.label,
            penalty: classification.penalty,
        }
    }
}
