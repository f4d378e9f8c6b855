use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Classification endpoints
        crate::api::handlers::classification::classify_blood_pressure,
        crate::api::handlers::classification::classify_body_physique,

        // Record endpoints
        crate::api::handlers::records::create_record,
        crate::api::handlers::records::list_records,
        crate::api::handlers::records::get_record,
        crate::api::handlers::records::update_record,
        crate::api::handlers::records::delete_record,
        crate::api::handlers::records::latest_blood_pressure,
        crate::api::handlers::records::latest_body_physique,
        crate::api::handlers::records::latest_height
    ),
    components(
        schemas(
            // Entities
            crate::entities::common::ErrorResponse,
            crate::entities::classification::ClassifyBloodPressureRequest,
            crate::entities::classification::ClassifyBodyPhysiqueRequest,
            crate::entities::classification::BloodPressureClassificationResponse,
            crate::entities::classification::BodyPhysiqueClassificationResponse,
            crate::entities::records::MeasurementPayload,
            crate::entities::records::CreateRecordRequest,
            crate::entities::records::UpdateRecordRequest,
            crate::entities::records::HealthRecordResponse,
            crate::entities::records::HeightResponse,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "classification", description = "Blood pressure and BMI classification"),
        (name = "records", description = "Health record management endpoints")
    ),
    info(
        title = "HealthTracker API",
        version = "0.1.0",
        description = "API for recording health measurements and classifying them into clinical bands",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_generation() {
        let openapi = ApiDoc::openapi();

        assert_eq!(openapi.info.title, "HealthTracker API");
        assert_eq!(openapi.info.version, "0.1.0");

        let tags = openapi.tags.as_ref().unwrap();
        assert!(tags.iter().any(|tag| tag.name == "classification"));
        assert!(tags.iter().any(|tag| tag.name == "records"));

        for path in [
            "/health",
            "/api/v1/classify/blood-pressure",
            "/api/v1/classify/body-physique",
            "/api/v1/records",
            "/api/v1/records/{id}",
            "/api/v1/owners/{owner_id}/latest/blood-pressure",
            "/api/v1/owners/{owner_id}/latest/body-physique",
            "/api/v1/owners/{owner_id}/latest/height",
        ] {
            assert!(openapi.paths.paths.contains_key(path), "missing path {}", path);
        }
    }

    #[test]
    fn test_api_doc_has_record_schemas() {
        let openapi = ApiDoc::openapi();
        let schemas = &openapi.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("HealthRecordResponse"));
        assert!(schemas.contains_key("MeasurementPayload"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
