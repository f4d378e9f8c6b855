use rust_decimal::Decimal;
use thiserror::Error;
use validator::Validate;

use crate::entities::blood_pressure::BloodPressureReading;
use crate::entities::body_physique::BodyPhysiqueReading;
use crate::entities::health_record::Measurement;

/// Lowest accepted value for any measurement
pub const MIN_MEASUREMENT: u16 = 1;

/// Highest accepted value for any measurement
pub const MAX_MEASUREMENT: u16 = 999;

/// Errors raised before a reading reaches a classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// Input outside its documented domain
    #[error("Precondition violation: {0}")]
    PreconditionViolation(String),
}

/// Check a blood pressure reading against the 1-999 domain
pub fn validate_blood_pressure(reading: &BloodPressureReading) -> Result<(), ClassificationError> {
    if let Err(validation_errors) = reading.validate() {
        let error_message = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let error_msgs: Vec<String> = errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    })
                    .collect();
                format!("{}: {}", field, error_msgs.join(", "))
            })
            .collect::<Vec<String>>()
            .join("; ");

        return Err(ClassificationError::PreconditionViolation(error_message));
    }

    Ok(())
}

/// Check a body physique reading against the 1-999 domain
pub fn validate_body_physique(reading: &BodyPhysiqueReading) -> Result<(), ClassificationError> {
    check_decimal_domain("weight_kg", reading.weight_kg)?;
    check_decimal_domain("height_cm", reading.height_cm)
}

/// Check whichever reading a measurement carries
pub fn validate_measurement(measurement: &Measurement) -> Result<(), ClassificationError> {
    match measurement {
        Measurement::BloodPressure(reading) => validate_blood_pressure(reading),
        Measurement::BodyPhysique(reading) => validate_body_physique(reading),
    }
}

fn check_decimal_domain(field: &str, value: Decimal) -> Result<(), ClassificationError> {
    let min = Decimal::from(MIN_MEASUREMENT);
    let max = Decimal::from(MAX_MEASUREMENT);

    if value < min || value > max {
        return Err(ClassificationError::PreconditionViolation(format!(
            "{}: must be between {} and {}, got {}",
            field, MIN_MEASUREMENT, MAX_MEASUREMENT, value
        )));
    }

    if value.round_dp(2) != value {
        return Err(ClassificationError::PreconditionViolation(format!(
            "{}: at most two fractional digits allowed, got {}",
            field, value
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_pressure_domain() {
        assert!(validate_blood_pressure(&BloodPressureReading::new(120, 80)).is_ok());

        let err = validate_blood_pressure(&BloodPressureReading::new(0, 80)).unwrap_err();
        assert!(err.to_string().contains("Systolic"));

        let err = validate_blood_pressure(&BloodPressureReading::new(120, 1200)).unwrap_err();
        assert!(err.to_string().contains("Diastolic"));
    }

    #[test]
    fn test_body_physique_domain() {
        let ok = BodyPhysiqueReading::new(Decimal::new(7050, 2), Decimal::new(175, 0));
        assert!(validate_body_physique(&ok).is_ok());

        let zero_height = BodyPhysiqueReading::new(Decimal::new(70, 0), Decimal::ZERO);
        let err = validate_body_physique(&zero_height).unwrap_err();
        assert!(err.to_string().contains("height_cm"));

        let heavy = BodyPhysiqueReading::new(Decimal::new(1000, 0), Decimal::new(175, 0));
        assert!(validate_body_physique(&heavy).is_err());
    }

    #[test]
    fn test_body_physique_allows_trailing_zeros_but_not_three_digits() {
        let trailing = BodyPhysiqueReading::new(Decimal::new(70000, 3), Decimal::new(175, 0));
        assert!(validate_body_physique(&trailing).is_ok());

        let precise = BodyPhysiqueReading::new(Decimal::new(70125, 3), Decimal::new(175, 0));
        assert!(validate_body_physique(&precise).is_err());
    }
}
