use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use tracing::{info, instrument};

use health_tracker_domain::entities::BodyPhysiqueReading;
use health_tracker_domain::services::validation::validate_body_physique;
use health_tracker_domain::services;

use crate::entities::classification::{
    BloodPressureClassificationResponse, BodyPhysiqueClassificationResponse, ClassifyBloodPressureRequest,
    ClassifyBodyPhysiqueRequest,
};
use crate::entities::common::{validate_request, ApiJson, ErrorResponse};

/// Classify a blood pressure reading
#[utoipa::path(
    post,
    path = "/api/v1/classify/blood-pressure",
    request_body = ClassifyBloodPressureRequest,
    responses(
        (status = 200, description = "Reading classified", body = BloodPressureClassificationResponse),
        (status = 400, description = "Reading outside 1-999", body = ErrorResponse),
    ),
    tag = "classification"
)]
#[instrument]
pub async fn classify_blood_pressure(
    ApiJson(request): ApiJson<ClassifyBloodPressureRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    validate_request(&request)?;

    let classification = services::classify_blood_pressure(request.systolic, request.diastolic);
    info!("Classified {} as '{}'", classification.pressure, classification.label);

    Ok((StatusCode::OK, Json(BloodPressureClassificationResponse::from(classification))))
}

/// Classify a body physique reading by BMI
#[utoipa::path(
    post,
    path = "/api/v1/classify/body-physique",
    request_body = ClassifyBodyPhysiqueRequest,
    responses(
        (status = 200, description = "Reading classified", body = BodyPhysiqueClassificationResponse),
        (status = 400, description = "Weight or height outside 1-999 or with more than two decimals", body = ErrorResponse),
    ),
    tag = "classification"
)]
#[instrument]
pub async fn classify_body_physique(
    ApiJson(request): ApiJson<ClassifyBodyPhysiqueRequest>,
) -> Result<impl IntoResponse, ErrorResponse> {
    validate_body_physique(&BodyPhysiqueReading::new(request.weight_kg, request.height_cm))?;

    let classification = services::classify_body_physique(request.weight_kg, request.height_cm)?;
    info!("Classified BMI {} as '{}'", classification.bmi, classification.label);

    Ok((StatusCode::OK, Json(BodyPhysiqueClassificationResponse::from(classification))))
}
