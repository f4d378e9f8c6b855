//! Body physique classification based on BMI.
//!
//! Bands follow the CDC adult BMI categories. BMI is rounded half-even to two
//! decimals before classification, which makes the bands contiguous.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::body_physique::{BodyPhysiqueClassification, BodyPhysiqueState};
use crate::services::validation::ClassificationError;

/// Number of decimals BMI is rounded to
pub const BMI_DECIMALS: u32 = 2;

/// Inclusive upper bound of each band below obese, in evaluation order
fn bmi_upper_bounds() -> [(BodyPhysiqueState, Decimal); 3] {
    [
        (BodyPhysiqueState::Under, Decimal::new(1849, 2)),
        (BodyPhysiqueState::Normal, Decimal::new(2499, 2)),
        (BodyPhysiqueState::Over, Decimal::new(2999, 2)),
    ]
}

/// BMI at which the penalty reaches zero
fn penalty_base() -> Decimal {
    Decimal::from(30)
}

/// Calculate BMI as weight / height_in_meters², rounded half-even to two decimals
pub fn calculate_bmi(weight_kg: Decimal, height_cm: Decimal) -> Result<Decimal, ClassificationError> {
    if height_cm <= Decimal::ZERO {
        return Err(ClassificationError::PreconditionViolation(format!(
            "height_cm: must be positive, got {}",
            height_cm
        )));
    }

    let height_m = height_cm * Decimal::new(1, 2);
    let bmi = weight_kg
        .checked_div(height_m * height_m)
        .ok_or_else(|| {
            ClassificationError::PreconditionViolation(format!(
                "BMI out of range for weight {} and height {}",
                weight_kg, height_cm
            ))
        })?;

    Ok(round_bmi(bmi))
}

fn round_bmi(bmi: Decimal) -> Decimal {
    bmi.round_dp_with_strategy(BMI_DECIMALS, RoundingStrategy::MidpointNearestEven)
}

/// Categorize a BMI value
pub fn categorize_bmi(bmi: Decimal) -> BodyPhysiqueState {
    let bmi = round_bmi(bmi);
    bmi_upper_bounds()
        .into_iter()
        .find(|(_, upper)| bmi <= *upper)
        .map_or(BodyPhysiqueState::Obese, |(state, _)| state)
}

/// Penalty score: zero for under and normal, `floor(30 - bmi)` otherwise.
///
/// The score is zero or negative for obese readings.
// TODO: confirm with product whether obese readings should score higher than overweight ones.
pub fn penalty(bmi: Decimal, state: BodyPhysiqueState) -> i64 {
    if !state.is_penalized() {
        return 0;
    }

    (penalty_base() - bmi).floor().to_i64().unwrap_or_default()
}

/// Derive BMI, state and penalty from weight and height
pub fn classify_body_physique(
    weight_kg: Decimal,
    height_cm: Decimal,
) -> Result<BodyPhysiqueClassification, ClassificationError> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;
    let state = categorize_bmi(bmi);

    Ok(BodyPhysiqueClassification {
        bmi,
        state,
        label: state.label().to_string(),
        penalty: penalty(bmi, state),
    })
}

/// Drop insignificant trailing zeros for display: 70.00 becomes 70, 70.50 becomes 70.5
pub fn strip_trailing_zero(value: Decimal) -> Decimal {
    value.normalize()
}
